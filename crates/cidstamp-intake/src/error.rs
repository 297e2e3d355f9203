//! Error types for cidstamp-intake.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error(transparent)]
    Io(#[from] cidstamp_fs::Error),

    #[error(transparent)]
    Archive(#[from] cidstamp_archive::Error),

    #[error("no pending extraction: intake a stamped archive first")]
    NoPendingExtraction,
}

pub type Result<T> = std::result::Result<T, IntakeError>;
