pub mod progress;

use std::io::BufReader;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Config;
use crate::convert::progress::ElapsedTimes;
use crate::media::probe::Prober;
use crate::media::MediaFile;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to run ffmpeg: {0}")]
    Launch(#[from] std::io::Error),
    #[error("ffmpeg exited with {status} while converting {file}")]
    EncoderFailed { file: String, status: ExitStatus },
}

/// Name of the output file produced for a given source: same stem, webm extension.
pub fn output_name(file: &MediaFile) -> String {
    format!("{}.webm", file.stem())
}

/// Convert one file according to the run configuration. A dry run logs a
/// notice and succeeds without touching anything. Failures are returned to
/// the driver, which reports them and moves on to the next file.
pub fn convert(file: &MediaFile, config: &Config, prober: &dyn Prober) -> Result<(), ConvertError> {
    if config.dry_run {
        tracing::info!("Dry run specified, not converting {}", file.name);
        return Ok(());
    }

    let input = config.path.join(&file.name);
    let output = config.path.join(output_name(file));

    if config.two_pass {
        two_pass(&input, &output, config, file)?;
    } else {
        single_pass(&input, &output, config, file, prober)?;
    }

    if config.cleanup {
        // opt-in risk: the new file's playability is never checked before deletion
        match std::fs::remove_file(&input) {
            Ok(()) => tracing::info!("Deleted original {}", file.name),
            Err(e) => tracing::warn!("Could not delete original {}: {}", file.name, e),
        }
    }

    Ok(())
}

/// Analysis pass discarding output, then the real encode using the pass-1 log.
fn two_pass(
    input: &Path,
    output: &Path,
    config: &Config,
    file: &MediaFile,
) -> Result<(), ConvertError> {
    tracing::info!("Performing two-pass conversion on {}", file.name);
    let crf = config.crf.to_string();

    let status = Command::new("ffmpeg")
        .arg("-hide_banner")
        .arg("-i")
        .arg(input)
        .args(["-c:v", "libvpx-vp9", "-b:v", "0", "-crf", &crf])
        .args(["-pass", "1", "-an", "-f", "null", "/dev/null"])
        .status()?;
    if !status.success() {
        return Err(ConvertError::EncoderFailed {
            file: file.name.clone(),
            status,
        });
    }

    let status = Command::new("ffmpeg")
        .args(["-loglevel", "warning", "-hide_banner"])
        .arg("-i")
        .arg(input)
        .args(["-c:v", "libvpx-vp9", "-b:v", "0", "-crf", &crf])
        .args(["-pass", "2", "-c:a", "libopus", "-ac", "6"])
        .arg(output)
        .status()?;
    if !status.success() {
        return Err(ConvertError::EncoderFailed {
            file: file.name.clone(),
            status,
        });
    }

    Ok(())
}

/// Single encode invocation. When the source duration is known the encoder's
/// status stream drives a progress bar; otherwise the invocation simply blocks
/// with no progress reporting.
fn single_pass(
    input: &Path,
    output: &Path,
    config: &Config,
    file: &MediaFile,
    prober: &dyn Prober,
) -> Result<(), ConvertError> {
    let total = prober.probe(input).and_then(|p| p.duration_secs());
    let mut cmd = encode_command(input, output, config);

    let status = match total {
        Some(total_secs) => {
            let mut child = cmd.stderr(Stdio::piped()).spawn()?;
            let bar = duration_bar(total_secs);
            if let Some(stderr) = child.stderr.take() {
                for elapsed in ElapsedTimes::new(BufReader::new(stderr)) {
                    bar.set_position(elapsed.min(total_secs).round() as u64);
                }
            }
            let status = child.wait()?;
            bar.finish_and_clear();
            status
        }
        None => {
            tracing::info!(
                "No duration available for {}, converting without progress",
                file.name
            );
            cmd.status()?
        }
    };

    if !status.success() {
        return Err(ConvertError::EncoderFailed {
            file: file.name.clone(),
            status,
        });
    }
    Ok(())
}

fn encode_command(input: &Path, output: &Path, config: &Config) -> Command {
    let mut cmd = Command::new("ffmpeg");
    cmd.args(["-y", "-hide_banner", "-loglevel", "error", "-stats"])
        .arg("-i")
        .arg(input)
        .args(["-map", "0:a", "-map", "0:v"])
        .args(["-c:v", "libvpx-vp9", "-b:v", "3M"])
        .args(["-crf", &config.crf.to_string()])
        .args(&config.extra_args)
        .args(["-c:a", "libopus", "-ac", "6"])
        .arg(output);
    cmd
}

/// Progress bar bounded by the probed total duration, in whole seconds.
fn duration_bar(total_secs: f64) -> ProgressBar {
    let bar = ProgressBar::new(total_secs.ceil() as u64);
    bar.set_style(
        ProgressStyle::with_template("{percent:>3}%|{bar:20}| {pos}/{len}s [{elapsed_precise}]")
            .expect("static progress template"),
    );
    bar
}
