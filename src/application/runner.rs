use tokio_util::sync::CancellationToken;

use crate::domain::jobs::{JobResult, SequenceJob};
use crate::ports::host::HostIntegration;
use crate::ports::transcoder::Transcoder;

/// Drive the external transcoder for one planned job.
///
/// The tool's own stderr is preserved verbatim in failures so the operator
/// sees the actual diagnostic, not a paraphrase. Cancelling the token drops
/// the in-flight invocation (the process adapter kills the child) and
/// reports failure instead of leaving a half-written sequence unreported.
pub async fn run(
    job: &SequenceJob,
    create_reference_plane: bool,
    transcoder: &impl Transcoder,
    host: &impl HostIntegration,
    cancel: &CancellationToken,
) -> JobResult {
    let template = job.output_template();
    tracing::info!(
        input = %job.input_path.display(),
        template = %template.display(),
        frames = job.expected_frames(),
        "starting extraction"
    );

    let extraction = transcoder.extract_frames(
        &job.input_path,
        job.trim.start().total_seconds(),
        job.duration_secs(),
        job.frame_rate,
        &template,
    );

    let launched = tokio::select! {
        _ = cancel.cancelled() => {
            tracing::warn!("extraction cancelled");
            return JobResult::Failure("extraction cancelled".to_string());
        }
        output = extraction => output,
    };

    let output = match launched {
        Ok(output) => output,
        Err(e) => {
            return JobResult::Failure(format!("could not launch frame extraction: {}", e));
        }
    };

    if !output.status.success() {
        return JobResult::Failure(String::from_utf8_lossy(&output.stderr).to_string());
    }

    tracing::info!("extraction finished");

    if create_reference_plane {
        let first_frame = job.first_frame_path();
        if let Err(e) = host.create_reference_plane(&first_frame).await {
            // Best effort; the sequence itself is done.
            tracing::warn!("reference plane creation failed: {}", e);
        }
    }

    JobResult::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;
    use std::os::unix::process::ExitStatusExt;
    use std::path::{Path, PathBuf};
    use std::process::{ExitStatus, Output};

    use crate::domain::jobs::TrimWindow;
    use crate::domain::timecode::Timecode;
    use crate::ports::host::MockHostIntegration;
    use crate::ports::transcoder::MockTranscoder;

    fn mock_output(stdout: &str, stderr: &str, success: bool) -> Output {
        Output {
            status: if success {
                ExitStatus::from_raw(0)
            } else {
                ExitStatus::from_raw(1)
            },
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        }
    }

    fn test_job() -> SequenceJob {
        let start = Timecode::parse("00:00:10").unwrap();
        let end = Timecode::parse("00:00:15").unwrap();
        SequenceJob {
            input_path: PathBuf::from("/media/v.mp4"),
            output_directory: PathBuf::from("/out"),
            output_basename: "seq".to_string(),
            output_extension: ".png".to_string(),
            frame_rate: 24,
            trim: TrimWindow::new(start, end).unwrap(),
        }
    }

    #[tokio::test]
    async fn passes_the_planned_parameters_to_the_transcoder() {
        let mut transcoder = MockTranscoder::new();
        transcoder
            .expect_extract_frames()
            .withf(|input, seek, duration, frame_rate, template| {
                input == Path::new("/media/v.mp4")
                    && *seek == 10.0
                    && *duration == 5.0
                    && *frame_rate == 24
                    && template == Path::new("/out/seq_%03d.png")
            })
            .times(1)
            .returning(|_, _, _, _, _| {
                let output = mock_output("", "", true);
                Box::pin(async move { Ok(output) })
            });
        let host = MockHostIntegration::new();

        let result = run(
            &test_job(),
            false,
            &transcoder,
            &host,
            &CancellationToken::new(),
        )
        .await;
        assert_eq!(result, JobResult::Success);
    }

    #[tokio::test]
    async fn nonzero_exit_carries_stderr_verbatim() {
        let mut transcoder = MockTranscoder::new();
        transcoder
            .expect_extract_frames()
            .times(1)
            .returning(|_, _, _, _, _| {
                let output = mock_output("", "ffmpeg: moov atom not found", false);
                Box::pin(async move { Ok(output) })
            });
        let host = MockHostIntegration::new();

        let result = run(
            &test_job(),
            false,
            &transcoder,
            &host,
            &CancellationToken::new(),
        )
        .await;
        assert_eq!(
            result,
            JobResult::Failure("ffmpeg: moov atom not found".to_string())
        );
    }

    #[tokio::test]
    async fn launch_failure_names_the_problem() {
        let mut transcoder = MockTranscoder::new();
        transcoder
            .expect_extract_frames()
            .times(1)
            .returning(|_, _, _, _, _| {
                Box::pin(async {
                    Err(io::Error::new(io::ErrorKind::NotFound, "ffmpeg not found"))
                })
            });
        let host = MockHostIntegration::new();

        let result = run(
            &test_job(),
            false,
            &transcoder,
            &host,
            &CancellationToken::new(),
        )
        .await;
        match result {
            JobResult::Failure(diagnostic) => assert!(diagnostic.contains("ffmpeg not found")),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn hands_the_first_frame_to_the_host_when_asked() {
        let mut transcoder = MockTranscoder::new();
        transcoder
            .expect_extract_frames()
            .times(1)
            .returning(|_, _, _, _, _| {
                let output = mock_output("", "", true);
                Box::pin(async move { Ok(output) })
            });
        let mut host = MockHostIntegration::new();
        host.expect_create_reference_plane()
            .withf(|first_frame| first_frame == Path::new("/out/seq_001.png"))
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let result = run(
            &test_job(),
            true,
            &transcoder,
            &host,
            &CancellationToken::new(),
        )
        .await;
        assert_eq!(result, JobResult::Success);
    }

    #[tokio::test]
    async fn host_failure_does_not_taint_the_result() {
        let mut transcoder = MockTranscoder::new();
        transcoder
            .expect_extract_frames()
            .times(1)
            .returning(|_, _, _, _, _| {
                let output = mock_output("", "", true);
                Box::pin(async move { Ok(output) })
            });
        let mut host = MockHostIntegration::new();
        host.expect_create_reference_plane()
            .times(1)
            .returning(|_| {
                Box::pin(async {
                    let err: Box<dyn Error + Send + Sync> = "host rejected the plane".into();
                    Err(err)
                })
            });

        let result = run(
            &test_job(),
            true,
            &transcoder,
            &host,
            &CancellationToken::new(),
        )
        .await;
        assert_eq!(result, JobResult::Success);
    }

    #[tokio::test]
    async fn skips_the_host_when_the_flag_is_off() {
        let mut transcoder = MockTranscoder::new();
        transcoder
            .expect_extract_frames()
            .times(1)
            .returning(|_, _, _, _, _| {
                let output = mock_output("", "", true);
                Box::pin(async move { Ok(output) })
            });
        let mut host = MockHostIntegration::new();
        host.expect_create_reference_plane().times(0);

        let result = run(
            &test_job(),
            false,
            &transcoder,
            &host,
            &CancellationToken::new(),
        )
        .await;
        assert_eq!(result, JobResult::Success);
    }

    #[tokio::test]
    async fn cancellation_reports_failure() {
        let mut transcoder = MockTranscoder::new();
        transcoder
            .expect_extract_frames()
            .returning(|_, _, _, _, _| Box::pin(std::future::pending::<io::Result<Output>>()));
        let host = MockHostIntegration::new();

        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = run(&test_job(), false, &transcoder, &host, &cancel).await;
        assert_eq!(result, JobResult::Failure("extraction cancelled".to_string()));
    }
}
