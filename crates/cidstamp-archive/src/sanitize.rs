use crate::error::{Error, Result};

/// Base name an entry is extracted under.
///
/// Only the last path component is kept, so the result can never point
/// outside the extraction directory. Names whose last component is empty,
/// `.` or `..`, or that contain a NUL byte, are rejected.
pub fn entry_file_name(entry: &str) -> Result<&str> {
    if entry.contains('\0') {
        return Err(Error::InvalidEntryName(entry.to_string()));
    }
    let base = entry.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(entry);
    match base {
        "" | "." | ".." => Err(Error::InvalidEntryName(entry.to_string())),
        _ => Ok(base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name() {
        assert_eq!(entry_file_name("photo.jpg").unwrap(), "photo.jpg");
    }

    #[test]
    fn nested_names_keep_base() {
        assert_eq!(entry_file_name("a/b/photo.jpg").unwrap(), "photo.jpg");
        assert_eq!(entry_file_name("a\\b\\doc.pdf").unwrap(), "doc.pdf");
    }

    #[test]
    fn traversal_collapses_to_base() {
        assert_eq!(entry_file_name("../../etc/passwd").unwrap(), "passwd");
    }

    #[test]
    fn rejects_unusable_names() {
        for name in ["", "dir/", "..", "a/..", ".", "bad\0name"] {
            assert!(
                matches!(entry_file_name(name), Err(Error::InvalidEntryName(_))),
                "{name:?} should be rejected"
            );
        }
    }
}
