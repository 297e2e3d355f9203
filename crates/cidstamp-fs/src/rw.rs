use std::io::Write;
use std::path::Path;

use crate::{Error, Result};

pub fn read(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write `content` to a hidden sibling of `path`, then rename it into place.
///
/// Readers of `path` see either the old file or the complete new one. The
/// sibling is removed if anything fails before the rename.
///
/// The sibling needs write permission on the parent directory. When that is
/// denied, the content is written to `path` directly and the guarantee above
/// is lost.
pub fn atomic_write(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let write_err = |e: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source: e,
    };

    let mut tmp = match tempfile::Builder::new()
        .prefix(".cidstamp-")
        .suffix(".tmp")
        .tempfile_in(parent)
    {
        Ok(tmp) => tmp,
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            tracing::debug!(path = %path.display(), "parent not writable, writing in place");
            return std::fs::write(path, content).map_err(write_err);
        }
        Err(e) => return Err(write_err(e)),
    };
    tmp.write_all(content).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}
