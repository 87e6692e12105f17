use std::io;
use std::path::Path;
use std::process::Output;

use async_trait::async_trait;

/// External frame-extraction process. The runner depends on this trait only,
/// so extraction logic stays testable without a transcoder on PATH.
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait Transcoder: Send + Sync {
    /// Extract stills from `input`, starting `seek_secs` in, for
    /// `duration_secs`, at `frame_rate` frames per second, expanding
    /// `output_template`'s printf-style index for each frame.
    async fn extract_frames(
        &self,
        input: &Path,
        seek_secs: f64,
        duration_secs: f64,
        frame_rate: u32,
        output_template: &Path,
    ) -> io::Result<Output>;
}
