use std::path::PathBuf;

use cidstamp_verify::ContentId;

/// Which archive and entry the pending extraction refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestReference {
    pub archive_path: PathBuf,
    pub payload_name: String,
    /// Identifier the user was shown at intake time.
    pub identifier:   ContentId,
}
