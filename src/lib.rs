//! frameseq - Trim-and-Export Engine
//!
//! Turns a trim window of a video file into a numbered still-image sequence
//! by driving external transcoding processes. The presentation shell (a
//! dialog, a CLI, a host-application panel) stays outside; it talks to the
//! engine through field validation, the readiness gate, the duration probe,
//! and job submission.
//!
//! Hexagonal Architecture:
//! - domain/: Pure values (timecodes, trim windows, jobs, form snapshots)
//! - ports/: Trait definitions for the external collaborators
//! - adapters/: Concrete ffmpeg/ffprobe process adapters
//! - application/: Planner, extraction runner, probe, service facade
//! - config: Environment configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports for convenience
pub use application::planner::{plan, PlanError, ALLOWED_EXTENSIONS};
pub use application::probe::{probe_duration, ProbeError};
pub use application::sequencer::SequencerService;
pub use config::EngineConfig;
pub use domain::form::{is_ready, validate_field, FormField, FormSnapshot, ValidState};
pub use domain::jobs::{JobResult, SequenceJob, TrimWindow};
pub use domain::timecode::{ParseError, Timecode};
