use crate::media::MediaFile;

/// Strategy for finding the converted counterpart of an original filename.
/// Kept behind a trait so reconciliation can be tested with a fixed matcher
/// and the similarity algorithm can be swapped without touching callers.
pub trait Matcher {
    /// Return the single closest candidate, or None when nothing clears the
    /// matcher's similarity threshold.
    fn best_match<'a>(&self, target: &str, candidates: &'a [MediaFile]) -> Option<&'a MediaFile>;
}

/// Fuzzy matcher over the Ratcliff/Obershelp similarity ratio.
///
/// With the default 0.6 cutoff, filenames that differ only in extension score
/// comfortably above the threshold while unrelated names fall below it.
#[derive(Debug, Clone)]
pub struct RatioMatcher {
    threshold: f64,
}

impl Default for RatioMatcher {
    fn default() -> Self {
        Self { threshold: 0.6 }
    }
}

impl RatioMatcher {
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Matcher for RatioMatcher {
    fn best_match<'a>(&self, target: &str, candidates: &'a [MediaFile]) -> Option<&'a MediaFile> {
        let mut best: Option<(&MediaFile, f64)> = None;
        for candidate in candidates {
            let ratio = similarity(target, &candidate.name);
            // strictly-greater keeps the earliest candidate on ties
            if best.map_or(true, |(_, best_ratio)| ratio > best_ratio) {
                best = Some((candidate, ratio));
            }
        }
        best.filter(|&(_, ratio)| ratio >= self.threshold)
            .map(|(candidate, _)| candidate)
    }
}

/// Ratcliff/Obershelp similarity in [0.0, 1.0]: twice the total length of all
/// matching blocks over the combined length. Two empty strings are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let combined = a_chars.len() + b_chars.len();
    if combined == 0 {
        return 1.0;
    }
    2.0 * matching_total(&a_chars, &b_chars) as f64 / combined as f64
}

/// Total length of all matching blocks: the longest common substring, plus
/// (recursively) the matching blocks to its left and to its right.
fn matching_total(a: &[char], b: &[char]) -> usize {
    let (i, j, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_total(&a[..i], &b[..j])
        + matching_total(&a[i + len..], &b[j + len..])
}

/// Longest common substring of `a` and `b` by DP over end positions.
/// Returns (start in a, start in b, length); (0, 0, 0) when nothing matches.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut lengths = vec![0usize; b.len() + 1];

    for (i, a_char) in a.iter().enumerate() {
        // iterate right-to-left so lengths[j] still holds the previous row
        for j in (0..b.len()).rev() {
            if *a_char == b[j] {
                let len = lengths[j] + 1;
                lengths[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            } else {
                lengths[j + 1] = 0;
            }
        }
        lengths[0] = 0;
    }

    best
}
