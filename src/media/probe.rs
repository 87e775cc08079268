use std::path::Path;
use std::process::Command;

use serde::Deserialize;

/// Structured metadata for one file as reported by the external probe tool.
/// Only the format-level duration is interpreted; the rest of the payload is
/// carried opaquely. Never cached — re-fetched whenever verification asks.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeResult {
    #[serde(default)]
    pub format: Option<ProbeFormat>,
    #[serde(default)]
    pub streams: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeFormat {
    /// String-encoded floating-point seconds, as ffprobe emits it.
    pub duration: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ProbeResult {
    /// Total duration in seconds, if the probe reported one that parses.
    pub fn duration_secs(&self) -> Option<f64> {
        self.format.as_ref()?.duration.as_deref()?.parse().ok()
    }
}

/// Metadata probe collaborator. A failed or malformed probe is a valid
/// outcome ("unknown"), never fatal, so the interface returns Option rather
/// than Result. Behind a trait so reconciliation tests can use canned values.
pub trait Prober {
    fn probe(&self, path: &Path) -> Option<ProbeResult>;
}

/// The real probe: `ffprobe -v quiet -print_format json -show_format -show_streams`.
pub struct FfprobeProber;

impl Prober for FfprobeProber {
    fn probe(&self, path: &Path) -> Option<ProbeResult> {
        let output = Command::new("ffprobe")
            .args([
                "-v",
                "quiet",
                "-print_format",
                "json",
                "-show_format",
                "-show_streams",
            ])
            .arg(path)
            .output();
        let output = match output {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!("Failed to run ffprobe on {}: {}", path.display(), e);
                return None;
            }
        };
        if !output.status.success() {
            tracing::warn!("ffprobe exited with {} for {}", output.status, path.display());
            return None;
        }
        match serde_json::from_slice(&output.stdout) {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::warn!("Unparseable ffprobe output for {}: {}", path.display(), e);
                None
            }
        }
    }
}
