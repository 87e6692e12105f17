//! Configuration for the engine's external tools.

use std::env;

/// Engine configuration, loaded once by the shell and handed to the service.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Frame-extraction binary
    pub ffmpeg_bin: String,
    /// Media-inspection binary
    pub ffprobe_bin: String,
    /// Upper bound for a single duration probe, in seconds
    pub probe_timeout_secs: u64,
}

impl EngineConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            ffmpeg_bin: env::var("FFMPEG_BIN").unwrap_or_else(|_| String::from("ffmpeg")),
            ffprobe_bin: env::var("FFPROBE_BIN").unwrap_or_else(|_| String::from("ffprobe")),
            probe_timeout_secs: env::var("PROBE_TIMEOUT_SECS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(10),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ffmpeg_bin: String::from("ffmpeg"),
            ffprobe_bin: String::from("ffprobe"),
            probe_timeout_secs: 10,
        }
    }
}
