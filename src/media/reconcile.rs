use crate::config::Config;
use crate::media::matcher::Matcher;
use crate::media::probe::Prober;
use crate::media::scan::Candidates;
use crate::media::MediaFile;

/// Relative tolerance for duration comparison. Catches truncated prior
/// conversions (encode killed mid-run) while ignoring sub-millisecond drift
/// between container timestamps.
pub const DURATION_REL_TOL: f64 = 1e-5;

/// Compute the minimal set of files still needing conversion, in listing order.
///
/// Cheap path: with no converted candidates present, or with reconciliation
/// explicitly disabled, every original needs conversion — no matching, no
/// probing.
pub fn reconcile(
    candidates: &Candidates,
    config: &Config,
    matcher: &dyn Matcher,
    prober: &dyn Prober,
) -> Vec<MediaFile> {
    if candidates.converted.is_empty() || config.ignore_prev_conv {
        return candidates.originals.clone();
    }
    verify_previous(candidates, config, matcher, prober)
}

/// For each original, decide whether a valid converted counterpart exists.
///
/// A fuzzy match whose stem differs from the original's is a false positive
/// and treated as "no counterpart". With strict mode off, a same-stem match is
/// trusted as-is. With strict mode on, both files are probed and the
/// counterpart is only trusted when its duration is within tolerance of the
/// original's. If the original itself cannot be probed, the file is skipped
/// from this run's decision entirely rather than guessed at.
fn verify_previous(
    candidates: &Candidates,
    config: &Config,
    matcher: &dyn Matcher,
    prober: &dyn Prober,
) -> Vec<MediaFile> {
    let mut unconverted = Vec::new();

    for original in &candidates.originals {
        let Some(matched) = matcher.best_match(&original.name, &candidates.converted) else {
            unconverted.push(original.clone());
            continue;
        };
        if matched.stem() != original.stem() {
            // closest fuzzy match is a different base filename
            unconverted.push(original.clone());
            continue;
        }

        if !config.strict_mode {
            tracing::debug!(
                "{} already converted ({}), skipping",
                original.name,
                matched.name
            );
            continue;
        }

        let original_duration = prober
            .probe(&config.path.join(&original.name))
            .and_then(|p| p.duration_secs());
        let Some(original_duration) = original_duration else {
            tracing::warn!(
                "Probing {} failed, leaving it out of this run's decision",
                original.name
            );
            continue;
        };

        let counterpart_duration = prober
            .probe(&config.path.join(&matched.name))
            .and_then(|p| p.duration_secs());
        match counterpart_duration {
            Some(d) if is_close(original_duration, d, DURATION_REL_TOL) => {
                tracing::debug!(
                    "{} verified against {} ({:.3}s vs {:.3}s)",
                    original.name,
                    matched.name,
                    original_duration,
                    d
                );
            }
            Some(d) => {
                tracing::info!(
                    "Duration mismatch for {} ({:.3}s vs {:.3}s in {}), reconverting",
                    original.name,
                    original_duration,
                    d,
                    matched.name
                );
                unconverted.push(original.clone());
            }
            None => {
                tracing::info!(
                    "Probing {} failed, reconverting the original",
                    matched.name
                );
                unconverted.push(original.clone());
            }
        }
    }

    unconverted
}

/// Symmetric relative-tolerance comparison: |a-b| <= rel_tol * max(|a|, |b|).
pub fn is_close(a: f64, b: f64, rel_tol: f64) -> bool {
    (a - b).abs() <= rel_tol * a.abs().max(b.abs())
}
