use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "webmify",
    about = "Batch-convert media files in a directory to VP9/WebM with ffmpeg",
    long_about = None,
    version = env!("GIT_VERSION"),
)]
pub struct Args {
    /// Two-pass encoding: an analysis pass followed by the real encode
    #[arg(long)]
    pub two_pass: bool,

    /// Disable two-pass encoding even if the config file enables it
    #[arg(long, conflicts_with = "two_pass")]
    pub no_two_pass: bool,

    /// Skip reconciliation of previous conversions and reconvert everything
    #[arg(long)]
    pub ignore_prev_conv: bool,

    /// Verify previous conversions by comparing probed durations [default: enabled]
    #[arg(long)]
    pub strict_mode: bool,

    /// Trust any same-stem webm counterpart without probing durations
    #[arg(long, conflicts_with = "strict_mode")]
    pub no_strict_mode: bool,

    /// Delete originals after successful conversion (not recommended)
    #[arg(long)]
    pub cleanup: bool,

    /// CRF value passed to the encoder [default: 30]
    #[arg(long)]
    pub crf: Option<u32>,

    /// Directory containing media files [default: current directory]
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Print the conversion plan but invoke no encoder
    #[arg(long)]
    pub dry_run: bool,

    /// Path to TOML config file (overrides default search: ./webmify.toml, ~/.config/webmify/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Two-pass as set on the command line, None when neither flag was given.
    pub fn two_pass_flag(&self) -> Option<bool> {
        flag_pair(self.two_pass, self.no_two_pass)
    }

    /// Strict mode as set on the command line, None when neither flag was given.
    pub fn strict_mode_flag(&self) -> Option<bool> {
        flag_pair(self.strict_mode, self.no_strict_mode)
    }
}

fn flag_pair(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
