//! File name formatting for frame locations.

/// Data URLs longer than this many bytes are abbreviated.
///
/// The native frame formatter and the source map filename decoder use the
/// same value, so a given file name renders identically everywhere.
pub const DATA_URL_ABBREV_THRESHOLD: usize = 150;

const DATA_URL_SCHEME: &str = "data:";

/// Shortens oversized inline-data file names.
pub trait FileNameAbbreviator: Send {
    /// Returns the abbreviated form of `file_name`.
    fn abbreviate(&self, file_name: &str) -> String;
}

/// Renders the file name part of a location.
#[derive(Clone, Copy)]
pub struct FileNameFormatter<'a> {
    abbreviator: &'a dyn FileNameAbbreviator,
}

impl<'a> FileNameFormatter<'a> {
    /// Creates a formatter delegating long data URLs to `abbreviator`.
    pub fn new(abbreviator: &'a dyn FileNameAbbreviator) -> Self {
        Self { abbreviator }
    }

    /// Formats a file name, abbreviating data URLs above the threshold.
    pub fn format(&self, file_name: &str) -> String {
        if file_name.starts_with(DATA_URL_SCHEME) && file_name.len() > DATA_URL_ABBREV_THRESHOLD {
            self.abbreviator.abbreviate(file_name)
        } else {
            file_name.to_string()
        }
    }
}
