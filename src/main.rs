use clap::Parser;

use webmify::media::matcher::RatioMatcher;
use webmify::media::probe::FfprobeProber;
use webmify::{cli, config, convert, media};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = cli::Args::parse();

    let file_config = config::find_config_file(args.config.as_deref()).and_then(|path| {
        match config::load_config(&path) {
            Ok(cfg) => {
                tracing::debug!("Loaded config from {}", path.display());
                Some(cfg)
            }
            Err(e) => {
                tracing::warn!("Failed to parse config file: {}", e);
                None
            }
        }
    });

    let config = config::Config::resolve(file_config, &args);

    if !config.path.exists() {
        eprintln!("error: path does not exist: {}", config.path.display());
        std::process::exit(1);
    }
    if !config.path.is_dir() {
        eprintln!("error: not a directory: {}", config.path.display());
        std::process::exit(1);
    }

    if config.cleanup {
        tracing::warn!(
            "Cleanup is enabled: originals will be deleted after conversion \
             without checking that the new file is playable"
        );
    }

    let candidates = match media::scan::list_candidates(&config.path) {
        Ok(candidates) => candidates,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let matcher = RatioMatcher::default();
    let prober = FfprobeProber;
    let queue = media::reconcile::reconcile(&candidates, &config, &matcher, &prober);

    if queue.is_empty() {
        tracing::info!("Nothing to convert.");
        return;
    }

    tracing::info!("{} file(s) to convert:", queue.len());
    for file in &queue {
        tracing::info!("  {}", file.name);
    }

    let total = queue.len();
    let mut failed = 0usize;
    for (i, file) in queue.iter().enumerate() {
        tracing::info!("[{}/{}] Converting {}", i + 1, total, file.name);
        if let Err(e) = convert::convert(file, &config, &prober) {
            tracing::error!("{}", e);
            failed += 1;
        }
    }

    // Per-file failures never abort the batch, but the run as a whole
    // reports them through the exit code.
    if failed > 0 {
        tracing::error!("{} of {} conversion(s) failed", failed, total);
        std::process::exit(1);
    }
}
