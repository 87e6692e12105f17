//! Domain layer - Pure values, no I/O.

pub mod form;
pub mod jobs;
pub mod timecode;
