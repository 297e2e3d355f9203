#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("content identifier mismatch: expected {expected}, got {actual}")]
    Mismatch {
        expected: String,
        actual:   String,
    },

    #[error("malformed content identifier '{0}'")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, VerificationError>;
