use std::path::{Path, PathBuf};

/// Configuration for intake and extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeOptions {
    /// Parent of the per-purpose temp directories.
    pub temp_root:          PathBuf,
    /// File name suffixes (without the leading dot) that mark a file as a
    /// candidate archive. Matched case-insensitively.
    pub archive_extensions: Vec<String>,
}

impl Default for IntakeOptions {
    fn default() -> Self {
        Self {
            temp_root:          std::env::temp_dir().join("cidstamp"),
            archive_extensions: vec!["zip".to_string(), "zip.stamp".to_string()],
        }
    }
}

impl IntakeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn temp_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.temp_root = root.into();
        self
    }

    pub fn archive_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.archive_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn temp_root_path(&self) -> &Path {
        &self.temp_root
    }
}
