pub mod matcher;
pub mod probe;
pub mod reconcile;
pub mod scan;

/// A media file within the working directory. It has no identity beyond its
/// name — the set of files is re-derived from a directory listing on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub name: String,
}

impl MediaFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Filename with its final extension removed ("ep1.mkv" -> "ep1").
    /// A name without a dot is its own stem.
    pub fn stem(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map_or(self.name.as_str(), |(stem, _)| stem)
    }

    /// Final extension, without the dot ("ep1.mkv" -> "mkv").
    pub fn extension(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(_, ext)| ext)
    }
}
