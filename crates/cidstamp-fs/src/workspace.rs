use std::io;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A purpose-named directory under a temp root.
///
/// Creating the value touches nothing on disk; the directory appears on the
/// first [`acquire`](Self::acquire) and is never removed.
#[derive(Clone, Debug)]
pub struct TempWorkspace {
    dir: PathBuf,
}

impl TempWorkspace {
    pub fn new(root: impl AsRef<Path>, purpose: &str) -> Self {
        Self {
            dir: root.as_ref().join(purpose),
        }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    pub fn acquire(&self) -> Result<TempSlot<'_>> {
        std::fs::create_dir_all(&self.dir).map_err(|e| Error::Write {
            path: self.dir.clone(),
            source: e,
        })?;
        Ok(TempSlot {
            workspace: self,
            file: None,
        })
    }

    /// Run `f` against a fresh slot. Whatever file `f` claimed is removed
    /// before this returns, whether `f` succeeded or not.
    pub fn scoped<T, E, F>(&self, f: F) -> std::result::Result<T, E>
    where
        E: From<Error>,
        F: FnOnce(&mut TempSlot<'_>) -> std::result::Result<T, E>,
    {
        let mut slot = self.acquire()?;
        f(&mut slot)
    }
}

/// Exclusive ownership of at most one file inside a [`TempWorkspace`].
pub struct TempSlot<'a> {
    workspace: &'a TempWorkspace,
    file: Option<PathBuf>,
}

impl TempSlot<'_> {
    pub fn dir(&self) -> &Path {
        self.workspace.path()
    }

    /// Take ownership of `path`, which must sit directly in [`dir`](Self::dir).
    /// A previously claimed file is released first.
    pub fn claim(&mut self, path: impl Into<PathBuf>) -> Result<&Path> {
        let path = path.into();
        if path.parent() != Some(self.dir()) {
            return Err(Error::OutsideWorkspace {
                path,
                workspace: self.dir().to_path_buf(),
            });
        }
        self.release_file();
        Ok(self.file.insert(path).as_path())
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn read(&self) -> Result<Vec<u8>> {
        match &self.file {
            Some(path) => crate::read(path),
            None => Err(Error::Read {
                path: self.dir().to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no file claimed in slot"),
            }),
        }
    }

    fn release_file(&mut self) {
        let Some(path) = self.file.take() else {
            return;
        };
        match std::fs::remove_file(&path) {
            Ok(()) => tracing::debug!(path = %path.display(), "removed temporary file"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to remove temporary file")
            }
        }
    }
}

impl Drop for TempSlot<'_> {
    fn drop(&mut self) {
        self.release_file();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_directory_created_lazily() {
        let dir = tempdir().unwrap();
        let ws = TempWorkspace::new(dir.path(), "preview");
        assert!(!ws.path().exists());

        drop(ws.acquire().unwrap());
        assert!(ws.path().is_dir());
    }

    #[test]
    fn test_slot_removes_file_on_drop() {
        let dir = tempdir().unwrap();
        let ws = TempWorkspace::new(dir.path(), "extraction");
        let target = ws.path().join("payload.bin");
        {
            let mut slot = ws.acquire().unwrap();
            std::fs::write(&target, b"data").unwrap();
            slot.claim(&target).unwrap();
            assert_eq!(slot.read().unwrap(), b"data");
        }
        assert!(!target.exists());
        assert!(ws.path().is_dir());
    }

    #[test]
    fn test_scoped_cleans_up_on_error() {
        let dir = tempdir().unwrap();
        let ws = TempWorkspace::new(dir.path(), "preview");
        let target = ws.path().join("photo.jpg");

        let result: std::result::Result<(), Error> = ws.scoped(|slot| {
            std::fs::write(&target, b"jpeg").unwrap();
            slot.claim(&target)?;
            Err(Error::Read {
                path: target.clone(),
                source: io::Error::other("consumer failed"),
            })
        });

        assert!(result.is_err());
        assert!(!target.exists());
    }

    #[test]
    fn test_claim_outside_workspace_rejected() {
        let dir = tempdir().unwrap();
        let ws = TempWorkspace::new(dir.path(), "preview");
        let mut slot = ws.acquire().unwrap();

        let err = slot.claim(dir.path().join("elsewhere.txt")).unwrap_err();
        assert!(matches!(err, Error::OutsideWorkspace { .. }));
        assert!(slot.file().is_none());
    }

    #[test]
    fn test_reclaim_releases_previous_file() {
        let dir = tempdir().unwrap();
        let ws = TempWorkspace::new(dir.path(), "preview");
        let first = ws.path().join("a");
        let second = ws.path().join("b");

        let mut slot = ws.acquire().unwrap();
        std::fs::write(&first, b"1").unwrap();
        slot.claim(&first).unwrap();
        std::fs::write(&second, b"2").unwrap();
        slot.claim(&second).unwrap();

        assert!(!first.exists());
        assert_eq!(slot.file(), Some(second.as_path()));
    }

    #[test]
    fn test_read_without_claim() {
        let dir = tempdir().unwrap();
        let ws = TempWorkspace::new(dir.path(), "preview");
        let slot = ws.acquire().unwrap();
        assert_eq!(slot.read().unwrap_err().io_kind(), Some(io::ErrorKind::NotFound));
    }

    #[test]
    fn test_already_removed_file_is_fine() {
        let dir = tempdir().unwrap();
        let ws = TempWorkspace::new(dir.path(), "preview");
        let target = ws.path().join("gone");
        let mut slot = ws.acquire().unwrap();
        std::fs::write(&target, b"x").unwrap();
        slot.claim(&target).unwrap();
        std::fs::remove_file(&target).unwrap();
        drop(slot);
    }
}
