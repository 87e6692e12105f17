use std::io;
use std::path::Path;
use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::domain::timecode::Timecode;
use crate::ports::prober::MediaProber;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("media probe timed out after {0} seconds")]
    Timeout(u64),
    #[error("input file not found: {0}")]
    NotFound(String),
    #[error("could not read a duration from {path}: {detail}")]
    Unreadable { path: String, detail: String },
    #[error("media inspection tool is not available: {0}")]
    ToolMissing(String),
}

/// Ask the media-inspection collaborator for the container duration.
///
/// Used to pre-fill the end-trim field when a file is picked; callers fall
/// back to manual entry on any error, so nothing here is fatal.
pub async fn probe_duration(
    input: &Path,
    prober: &impl MediaProber,
    timeout: Duration,
) -> Result<Timecode, ProbeError> {
    if !input.exists() {
        return Err(ProbeError::NotFound(input.display().to_string()));
    }

    let output = tokio::time::timeout(timeout, prober.media_info(input))
        .await
        .map_err(|_| ProbeError::Timeout(timeout.as_secs()))?
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ProbeError::ToolMissing(e.to_string()),
            _ => ProbeError::Unreadable {
                path: input.display().to_string(),
                detail: e.to_string(),
            },
        })?;

    if !output.status.success() {
        return Err(ProbeError::Unreadable {
            path: input.display().to_string(),
            detail: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    let info: Value =
        serde_json::from_slice(&output.stdout).map_err(|e| ProbeError::Unreadable {
            path: input.display().to_string(),
            detail: e.to_string(),
        })?;

    // ffprobe reports the duration as a decimal string under "format".
    let duration = info.get("format").and_then(|format| format.get("duration"));
    let seconds = match duration {
        Some(Value::String(text)) => text.parse::<f64>().ok(),
        Some(Value::Number(number)) => number.as_f64(),
        _ => None,
    }
    .ok_or_else(|| ProbeError::Unreadable {
        path: input.display().to_string(),
        detail: "no duration in probe output".to_string(),
    })?;

    tracing::debug!(seconds, input = %input.display(), "probed container duration");

    Ok(Timecode::from_seconds(seconds))
}
