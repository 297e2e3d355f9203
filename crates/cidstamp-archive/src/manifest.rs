//! Manifest-designated payload resolution.
//!
//! A stamped archive carries a root entry named [`MANIFEST_ENTRY`] whose
//! trimmed text is the exact name of one other entry, the payload. Anything
//! short of that (no manifest, an empty or non-UTF-8 manifest, a manifest
//! naming itself or a missing entry) means "not a stamp" rather than an
//! error, so the caller can fall back to treating the archive as a plain file.

use crate::error::{Error, Result};
use crate::reader::{Archive, EntryRef};

pub const MANIFEST_ENTRY: &str = "manifest.txt";

/// The payload entry a manifest points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayloadRef {
    pub entry: EntryRef,
}

impl PayloadRef {
    pub fn name(&self) -> &str {
        &self.entry.name
    }
}

/// Extract the payload name from manifest text.
pub fn parse_manifest(text: &str) -> Option<&str> {
    match text.trim() {
        "" | MANIFEST_ENTRY => None,
        name => Some(name),
    }
}

/// Resolve the payload of `archive`.
///
/// Returns `Ok(None)` for every "not a stamp" case. Errors are only returned
/// when the manifest entry exists but cannot be read back out of the
/// container.
pub fn resolve<A: Archive + ?Sized>(archive: &mut A) -> Result<Option<PayloadRef>> {
    let Some(manifest) = archive.find_entry(MANIFEST_ENTRY) else {
        tracing::debug!("archive has no {MANIFEST_ENTRY}");
        return Ok(None);
    };

    let text = match archive.read_text(&manifest) {
        Ok(text) => text,
        Err(Error::NotText(_)) => {
            tracing::debug!("{MANIFEST_ENTRY} is not UTF-8 text");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    let Some(name) = parse_manifest(&text) else {
        tracing::debug!("{MANIFEST_ENTRY} does not name a payload");
        return Ok(None);
    };

    match archive.find_entry(name) {
        Some(entry) => Ok(Some(PayloadRef { entry })),
        None => {
            tracing::debug!(payload = name, "{MANIFEST_ENTRY} names a missing entry");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    /// In-memory archive for exercising resolution without a container format.
    #[derive(Default)]
    struct MemArchive {
        entries: BTreeMap<String, Vec<u8>>,
    }

    impl MemArchive {
        fn with(entries: &[(&str, &[u8])]) -> Self {
            Self {
                entries: entries
                    .iter()
                    .map(|(name, data)| (name.to_string(), data.to_vec()))
                    .collect(),
            }
        }
    }

    impl Archive for MemArchive {
        fn entry_names(&self) -> Vec<String> {
            self.entries.keys().cloned().collect()
        }

        fn find_entry(&self, name: &str) -> Option<EntryRef> {
            self.entries
                .keys()
                .position(|k| k == name)
                .map(|index| EntryRef {
                    name: name.to_string(),
                    index,
                })
        }

        fn read_bytes(&mut self, entry: &EntryRef) -> Result<Vec<u8>> {
            self.entries
                .get(&entry.name)
                .cloned()
                .ok_or_else(|| Error::EntryNotFound(entry.name.clone()))
        }
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(parse_manifest("payload.png\n"), Some("payload.png"));
        assert_eq!(parse_manifest("  \r\npayload.png\r\n"), Some("payload.png"));
        assert_eq!(parse_manifest(" \n\t"), None);
        assert_eq!(parse_manifest("manifest.txt\n"), None);
    }

    #[test]
    fn resolves_named_payload() {
        let mut archive = MemArchive::with(&[
            ("manifest.txt", b"payload.png\n"),
            ("payload.png", b"png"),
        ]);
        let payload = resolve(&mut archive).unwrap().unwrap();
        assert_eq!(payload.name(), "payload.png");
    }

    #[test]
    fn missing_manifest_is_not_a_stamp() {
        let mut archive = MemArchive::with(&[("payload.png", b"png")]);
        assert_eq!(resolve(&mut archive).unwrap(), None);
    }

    #[test]
    fn missing_target_is_not_a_stamp() {
        let mut archive = MemArchive::with(&[("manifest.txt", b"ghost.png")]);
        assert_eq!(resolve(&mut archive).unwrap(), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut archive = MemArchive::with(&[
            ("manifest.txt", b"Payload.PNG"),
            ("payload.png", b"png"),
        ]);
        assert_eq!(resolve(&mut archive).unwrap(), None);
    }

    #[test]
    fn non_utf8_manifest_is_not_a_stamp() {
        let mut archive = MemArchive::with(&[
            ("manifest.txt", &[0xff, 0xfe, 0x00]),
            ("payload.png", b"png"),
        ]);
        assert_eq!(resolve(&mut archive).unwrap(), None);
    }

    #[test]
    fn multi_line_manifest_does_not_match() {
        let mut archive = MemArchive::with(&[
            ("manifest.txt", b"a.txt\nb.txt\n"),
            ("a.txt", b"a"),
            ("b.txt", b"b"),
        ]);
        assert_eq!(resolve(&mut archive).unwrap(), None);
    }
}
