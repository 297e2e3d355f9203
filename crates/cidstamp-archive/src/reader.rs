use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::sanitize::entry_file_name;

/// A located entry inside an opened archive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryRef {
    pub name:  String,
    pub index: usize,
}

/// Opens containers of one format.
pub trait ArchiveReader {
    type Archive: Archive;

    /// Fails with [`Error::NotAnArchive`] when the file is not a parsable container.
    fn open(&self, path: &Path) -> Result<Self::Archive>;
}

/// An opened container.
pub trait Archive {
    fn entry_names(&self) -> Vec<String>;

    /// Exact, case-sensitive lookup. Directory entries are never returned.
    fn find_entry(&self, name: &str) -> Option<EntryRef>;

    /// Decompressed bytes of `entry`.
    fn read_bytes(&mut self, entry: &EntryRef) -> Result<Vec<u8>>;

    fn read_text(&mut self, entry: &EntryRef) -> Result<String> {
        let bytes = self.read_bytes(entry)?;
        String::from_utf8(bytes).map_err(|_| Error::NotText(entry.name.clone()))
    }

    /// Write `entry` to `dest_dir/<base name>`, overwriting any existing file.
    /// Returns the written path. Nothing is left behind on failure.
    fn extract_to(&mut self, entry: &EntryRef, dest_dir: &Path) -> Result<PathBuf> {
        let file_name = entry_file_name(&entry.name)?;
        let bytes = self.read_bytes(entry)?;

        std::fs::create_dir_all(dest_dir).map_err(|e| Error::ExtractionFailed {
            path: dest_dir.to_path_buf(),
            source: e,
        })?;

        let target = dest_dir.join(file_name);
        if let Err(e) = std::fs::write(&target, &bytes) {
            discard_partial(&target);
            return Err(Error::ExtractionFailed {
                path: target,
                source: e,
            });
        }
        Ok(target)
    }
}

fn discard_partial(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "removed partial extraction"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove partial extraction")
        }
    }
}
