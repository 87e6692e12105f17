use std::io;
use std::path::Path;
use std::process::Output;

use async_trait::async_trait;
use tokio::process::Command;

use crate::ports::prober::MediaProber;

/// Shells out to ffprobe for container metadata in JSON form.
#[derive(Clone)]
pub struct FfprobeProber {
    bin: String,
}

impl FfprobeProber {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }
}

#[async_trait]
impl MediaProber for FfprobeProber {
    async fn media_info(&self, input: &Path) -> io::Result<Output> {
        Command::new(&self.bin)
            .arg("-v")
            .arg("error")
            .arg("-show_format")
            .arg("-print_format")
            .arg("json")
            .arg(input)
            .kill_on_drop(true)
            .output()
            .await
    }
}
