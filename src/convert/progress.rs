use std::io::BufRead;
use std::sync::LazyLock;

use regex::Regex;

/// Elapsed-time marker in the encoder's status stream: `time=HH:MM:SS.frac`.
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"time=(\d+):(\d+):(\d+\.\d+)").expect("static regex"));

/// Parse the elapsed-time marker out of one status line, as total seconds.
/// Lines without a marker yield None — that is not an error, just no update.
pub fn parse_elapsed(line: &str) -> Option<f64> {
    let caps = TIME_RE.captures(line)?;
    let hours: f64 = caps[1].parse().ok()?;
    let minutes: f64 = caps[2].parse().ok()?;
    let seconds: f64 = caps[3].parse().ok()?;
    Some(hours * 3600.0 + minutes * 60.0 + seconds)
}

/// Lazy sequence of elapsed-time samples read line-by-line from a status
/// stream. Decouples the parsing (testable with canned text) from whatever
/// sink renders the progress. Ends at EOF or the first read error.
pub struct ElapsedTimes<R> {
    lines: std::io::Lines<R>,
}

impl<R: BufRead> ElapsedTimes<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for ElapsedTimes<R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        for line in self.lines.by_ref() {
            let Ok(line) = line else {
                return None;
            };
            if let Some(secs) = parse_elapsed(&line) {
                return Some(secs);
            }
        }
        None
    }
}
