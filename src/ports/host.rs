use std::error::Error;
use std::path::Path;

use async_trait::async_trait;

/// Optional host-application collaborator. After a successful extraction the
/// runner hands over the first generated frame so the host can build a
/// reference plane that advances through the sequence. Best effort only; the
/// runner swallows failures from this port.
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait HostIntegration: Send + Sync {
    async fn create_reference_plane(
        &self,
        first_frame: &Path,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;
}
