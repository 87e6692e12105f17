//! Adapters - Concrete implementations of ports.

pub mod ffmpeg;
pub mod ffprobe;
pub mod host;
