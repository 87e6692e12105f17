use std::io;
use std::path::Path;
use std::process::Output;

use async_trait::async_trait;
use tokio::process::Command;

use crate::ports::transcoder::Transcoder;

/// Shells out to ffmpeg to turn a trim window into numbered stills.
///
/// `-y` leaves overwrite handling to ffmpeg's default: same-named frames
/// from an earlier run are replaced, unrelated files are untouched.
#[derive(Clone)]
pub struct FfmpegTranscoder {
    bin: String,
}

impl FfmpegTranscoder {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn extract_frames(
        &self,
        input: &Path,
        seek_secs: f64,
        duration_secs: f64,
        frame_rate: u32,
        output_template: &Path,
    ) -> io::Result<Output> {
        tracing::debug!(
            input = %input.display(),
            seek_secs,
            duration_secs,
            frame_rate,
            "launching {}",
            self.bin
        );

        Command::new(&self.bin)
            .arg("-y")
            .arg("-ss")
            .arg(seek_secs.to_string())
            .arg("-i")
            .arg(input)
            .arg("-t")
            .arg(duration_secs.to_string())
            .arg("-r")
            .arg(frame_rate.to_string())
            .arg(output_template)
            .kill_on_drop(true)
            .output()
            .await
    }
}
