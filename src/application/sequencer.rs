use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use crate::application::planner::{self, PlanError};
use crate::application::probe::{self, ProbeError};
use crate::application::runner;
use crate::config::EngineConfig;
use crate::domain::form::FormSnapshot;
use crate::domain::jobs::{JobResult, SequenceJob};
use crate::domain::timecode::Timecode;
use crate::ports::host::HostIntegration;
use crate::ports::prober::MediaProber;
use crate::ports::transcoder::Transcoder;

/// The engine facade the presentation shell talks to.
///
/// Holds no state between invocations; every call works off the values
/// passed in.
pub struct SequencerService<T, P, H> {
    transcoder: T,
    prober: P,
    host: H,
    config: EngineConfig,
}

impl<T, P, H> SequencerService<T, P, H>
where
    T: Transcoder,
    P: MediaProber,
    H: HostIntegration,
{
    pub fn new(transcoder: T, prober: P, host: H, config: EngineConfig) -> Self {
        Self {
            transcoder,
            prober,
            host,
            config,
        }
    }

    /// Container duration, for pre-filling the end-trim field.
    pub async fn probe_duration(&self, input: &Path) -> Result<Timecode, ProbeError> {
        probe::probe_duration(
            input,
            &self.prober,
            Duration::from_secs(self.config.probe_timeout_secs),
        )
        .await
    }

    /// Parse the snapshot's trim fields and resolve it into a job without
    /// launching anything.
    pub fn plan_snapshot(&self, snapshot: &FormSnapshot) -> Result<SequenceJob, PlanError> {
        let start = Timecode::parse(&snapshot.start_trim)?;
        let end = Timecode::parse(&snapshot.end_trim)?;

        planner::plan(
            Path::new(&snapshot.input_path),
            snapshot.frame_rate,
            start,
            end,
            Path::new(&snapshot.output_directory),
            &snapshot.output_basename,
            &snapshot.output_extension,
        )
    }

    /// Plan and execute in one call. Plan failures fold into `Failure` with
    /// the typed error's own message, so the shell displays one result type.
    pub async fn submit(&self, snapshot: &FormSnapshot) -> JobResult {
        self.submit_with_cancel(snapshot, &CancellationToken::new())
            .await
    }

    pub async fn submit_with_cancel(
        &self,
        snapshot: &FormSnapshot,
        cancel: &CancellationToken,
    ) -> JobResult {
        let job = match self.plan_snapshot(snapshot) {
            Ok(job) => job,
            Err(e) => return JobResult::Failure(e.to_string()),
        };

        runner::run(
            &job,
            snapshot.create_reference_plane,
            &self.transcoder,
            &self.host,
            cancel,
        )
        .await
    }
}

impl<T, P, H> SequencerService<T, P, H>
where
    T: Transcoder + 'static,
    P: MediaProber + 'static,
    H: HostIntegration + 'static,
{
    /// Run the extraction on a background task so the caller's event loop
    /// stays responsive. The result arrives on the returned channel; the
    /// token cancels the external process.
    pub fn submit_background(
        self: &Arc<Self>,
        snapshot: FormSnapshot,
    ) -> (oneshot::Receiver<JobResult>, CancellationToken) {
        let (sender, receiver) = oneshot::channel();
        let cancel = CancellationToken::new();

        let service = Arc::clone(self);
        let token = cancel.clone();
        tokio::spawn(async move {
            let result = service.submit_with_cancel(&snapshot, &token).await;
            let _ = sender.send(result);
        });

        (receiver, cancel)
    }
}
