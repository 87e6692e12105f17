use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;

use frameseq::adapters::ffmpeg::FfmpegTranscoder;
use frameseq::adapters::ffprobe::FfprobeProber;
use frameseq::adapters::host::NullHostIntegration;
use frameseq::{is_ready, EngineConfig, FormSnapshot, JobResult, SequencerService};

/// Turn a trim window of a video file into a numbered still-image sequence.
#[derive(Debug, Parser)]
#[command(name = "frameseq", version)]
struct Args {
    /// Source video file
    input: PathBuf,

    /// Trim start, HH:MM:SS[.ff] or MM:SS[.ff]
    #[arg(long, default_value = "00:00:00")]
    start: String,

    /// Trim end; probed from the source when omitted
    #[arg(long)]
    end: Option<String>,

    /// Output frame rate
    #[arg(long, default_value_t = 24)]
    fps: u32,

    /// Directory that receives the numbered stills
    #[arg(long)]
    out_dir: PathBuf,

    /// Base name of each still, expanded as <name>_NNN<ext>
    #[arg(long)]
    name: String,

    /// Still-image extension
    #[arg(long, default_value = ".png")]
    ext: String,

    /// Hand the first frame to an attached 3D host as a reference plane
    #[arg(long)]
    reference_plane: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = EngineConfig::from_env();

    let service = Arc::new(SequencerService::new(
        FfmpegTranscoder::new(config.ffmpeg_bin.clone()),
        FfprobeProber::new(config.ffprobe_bin.clone()),
        NullHostIntegration,
        config,
    ));

    // Pre-fill the end trim from the container duration, like the dialog
    // does when a file is picked.
    let end_trim = match args.end {
        Some(end) => end,
        None => match service.probe_duration(&args.input).await {
            Ok(duration) => duration.to_string(),
            Err(e) => {
                eprintln!("could not probe duration: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let snapshot = FormSnapshot {
        input_path: args.input.display().to_string(),
        output_basename: args.name,
        start_trim: args.start,
        end_trim,
        output_directory: args.out_dir.display().to_string(),
        output_extension: args.ext,
        frame_rate: args.fps,
        create_reference_plane: args.reference_plane,
    };

    if !is_ready(&snapshot) {
        eprintln!("inputs are incomplete or the trim fields are not valid timecodes");
        return ExitCode::FAILURE;
    }

    let out_dir = snapshot.output_directory.clone();
    let (mut receiver, cancel) = service.submit_background(snapshot);

    let result = tokio::select! {
        result = &mut receiver => result,
        _ = tokio::signal::ctrl_c() => {
            cancel.cancel();
            receiver.await
        }
    };

    match result {
        Ok(JobResult::Success) => {
            println!("image sequence written to {}", out_dir);
            ExitCode::SUCCESS
        }
        Ok(JobResult::Failure(diagnostic)) => {
            eprintln!("{}", diagnostic);
            ExitCode::FAILURE
        }
        Err(_) => {
            eprintln!("extraction task ended without reporting a result");
            ExitCode::FAILURE
        }
    }
}
