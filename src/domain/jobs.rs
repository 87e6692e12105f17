use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::timecode::Timecode;

/// The part of the source media to extract: [start, end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimWindow {
    start: Timecode,
    end: Timecode,
}

impl TrimWindow {
    /// `None` unless `end` is strictly after `start`.
    pub fn new(start: Timecode, end: Timecode) -> Option<TrimWindow> {
        if end.total_seconds() > start.total_seconds() {
            Some(TrimWindow { start, end })
        } else {
            None
        }
    }

    pub fn start(&self) -> Timecode {
        self.start
    }

    pub fn end(&self) -> Timecode {
        self.end
    }

    pub fn duration_secs(&self) -> f64 {
        self.end.total_seconds() - self.start.total_seconds()
    }
}

/// Fully resolved description of one extraction run. Built by the planner,
/// handed by value to the runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceJob {
    pub input_path: PathBuf,
    pub output_directory: PathBuf,
    pub output_basename: String,
    pub output_extension: String,
    pub frame_rate: u32,
    pub trim: TrimWindow,
}

impl SequenceJob {
    /// Printf-style template the transcoder expands, e.g. `/out/shot_%03d.png`.
    pub fn output_template(&self) -> PathBuf {
        self.output_directory.join(format!(
            "{}_%03d{}",
            self.output_basename, self.output_extension
        ))
    }

    /// Path of the first frame the transcoder will write (index 1).
    pub fn first_frame_path(&self) -> PathBuf {
        self.output_directory.join(format!(
            "{}_001{}",
            self.output_basename, self.output_extension
        ))
    }

    pub fn duration_secs(&self) -> f64 {
        self.trim.duration_secs()
    }

    /// Frame count the trim window should produce at the requested rate.
    pub fn expected_frames(&self) -> u64 {
        (self.duration_secs() * self.frame_rate as f64).round() as u64
    }
}

/// Outcome of one extraction run, displayed by the shell. Never retried
/// automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobResult {
    Success,
    Failure(String),
}

impl JobResult {
    pub fn is_success(&self) -> bool {
        matches!(self, JobResult::Success)
    }
}
