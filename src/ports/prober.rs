use std::io;
use std::path::Path;
use std::process::Output;

use async_trait::async_trait;

/// External media-inspection process. Stdout carries machine-readable
/// container info that the application layer parses for a duration.
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait MediaProber: Send + Sync {
    async fn media_info(&self, input: &Path) -> io::Result<Output>;
}
