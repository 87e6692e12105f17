use std::error::Error;
use std::path::Path;

use async_trait::async_trait;

use crate::ports::host::HostIntegration;

/// Stand-in used when no 3D host is attached (the standalone-dialog case in
/// the original tool). Logs the handoff and succeeds.
#[derive(Clone, Copy)]
pub struct NullHostIntegration;

#[async_trait]
impl HostIntegration for NullHostIntegration {
    async fn create_reference_plane(
        &self,
        first_frame: &Path,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        tracing::info!(
            "no host attached; skipping reference plane for {}",
            first_frame.display()
        );
        Ok(())
    }
}
