use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open '{path}': {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("'{path}' is not an archive: {reason}")]
    NotAnArchive { path: PathBuf, reason: String },

    #[error("archive entry '{entry}' is corrupted: {reason}")]
    Corrupted { entry: String, reason: String },

    #[error("entry '{0}' not found in archive")]
    EntryNotFound(String),

    #[error("entry '{0}' has no usable file name")]
    InvalidEntryName(String),

    #[error("entry '{0}' is not valid UTF-8 text")]
    NotText(String),

    #[error("failed to extract to '{path}': {source}")]
    ExtractionFailed { path: PathBuf, source: io::Error },
}

impl Error {
    /// Whether this error means the container itself could not be used, as
    /// opposed to an I/O problem on the caller's side.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Error::NotAnArchive { .. } | Error::Corrupted { .. } | Error::NotText(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
