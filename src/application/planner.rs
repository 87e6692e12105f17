use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::domain::jobs::{SequenceJob, TrimWindow};
use crate::domain::timecode::{ParseError, Timecode};

/// Still-image formats the extraction process is expected to encode.
pub const ALLOWED_EXTENSIONS: [&str; 5] = [".png", ".jpg", ".jpeg", ".tiff", ".exr"];

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("frame rate must be a positive number of frames per second")]
    BadFrameRate,
    #[error("trim end {end} must come after trim start {start}")]
    EndBeforeStart { start: Timecode, end: Timecode },
    #[error("input file missing or unreadable: {0}")]
    MissingInput(PathBuf),
    #[error("output directory cannot be written: {0}")]
    UnwritableOutput(PathBuf),
    #[error("unsupported still-image extension: {0:?}")]
    BadExtension(String),
    #[error("output base name must not be empty")]
    EmptyBasename,
    #[error("trim field is not a valid timecode: {0}")]
    BadTimecode(#[from] ParseError),
}

/// Resolve validated inputs into a concrete extraction job.
///
/// Everything that can be checked before an external process is worth
/// launching is checked here. Never creates directories and never touches
/// the output files; an accepted-but-absent output directory fails later
/// with the transcoder's own diagnostic.
pub fn plan(
    input_path: &Path,
    frame_rate: u32,
    start: Timecode,
    end: Timecode,
    output_directory: &Path,
    output_basename: &str,
    output_extension: &str,
) -> Result<SequenceJob, PlanError> {
    if frame_rate == 0 {
        return Err(PlanError::BadFrameRate);
    }

    let trim = TrimWindow::new(start, end).ok_or(PlanError::EndBeforeStart { start, end })?;

    let input_path = normalize(input_path);
    if !input_path.is_file() {
        return Err(PlanError::MissingInput(input_path));
    }

    if output_basename.is_empty() {
        return Err(PlanError::EmptyBasename);
    }

    let extension = output_extension.to_ascii_lowercase();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(PlanError::BadExtension(output_extension.to_string()));
    }

    let output_directory = normalize(output_directory);
    if !writable_directory(&output_directory) {
        return Err(PlanError::UnwritableOutput(output_directory));
    }

    Ok(SequenceJob {
        input_path,
        output_directory,
        output_basename: output_basename.to_string(),
        output_extension: extension,
        frame_rate,
        trim,
    })
}

/// Lexical normalization in the spirit of the platform's normpath: drops
/// redundant `.` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            other => normalized.push(other.as_os_str()),
        }
    }
    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

/// An existing writable directory, or a missing one whose parent exists so
/// the operator can create it. Directory creation is deliberately not done
/// here.
fn writable_directory(dir: &Path) -> bool {
    if dir.is_dir() {
        return std::fs::metadata(dir)
            .map(|meta| !meta.permissions().readonly())
            .unwrap_or(false);
    }
    dir.parent().map(Path::is_dir).unwrap_or(false)
}
