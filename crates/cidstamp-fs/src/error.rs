use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("'{path}' is outside workspace '{workspace}'")]
    OutsideWorkspace { path: PathBuf, workspace: PathBuf },
}

impl Error {
    /// Underlying I/O error kind, if any.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Error::Read { source, .. } | Error::Write { source, .. } => Some(source.kind()),
            Error::OutsideWorkspace { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
