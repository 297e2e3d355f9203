use std::path::{Path, PathBuf};

use cidstamp_archive::{Archive, ArchiveReader, ZipReader};
use cidstamp_fs::TempWorkspace;
use cidstamp_verify::ContentId;

use crate::EXTRACTION_PURPOSE;
use crate::data::{IntakeOptions, ManifestReference};
use crate::error::{IntakeError, Result};

/// Holds the single pending extraction and carries it out on request.
///
/// At most one [`ManifestReference`] is held. A new archive intake replaces
/// it; a plain or failed intake clears it. Both operations take `&mut self`,
/// so an extraction can never observe a half-applied intake.
pub struct ExtractionSession<R: ArchiveReader = ZipReader> {
    reader:    R,
    workspace: TempWorkspace,
    pending:   Option<ManifestReference>,
}

impl<R: ArchiveReader> ExtractionSession<R> {
    pub fn new(reader: R, options: &IntakeOptions) -> Self {
        Self {
            reader,
            workspace: TempWorkspace::new(options.temp_root_path(), EXTRACTION_PURPOSE),
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<&ManifestReference> {
        self.pending.as_ref()
    }

    /// Make `reference` the pending extraction, returning the one it displaced.
    pub fn replace(&mut self, reference: ManifestReference) -> Option<ManifestReference> {
        self.pending.replace(reference)
    }

    pub fn clear(&mut self) -> Option<ManifestReference> {
        self.pending.take()
    }

    /// Save the pending payload to `destination`.
    ///
    /// The archive is reopened and the payload looked up again by name, so an
    /// archive that changed since intake fails here with
    /// [`cidstamp_archive::Error::EntryNotFound`] or a container error. The
    /// payload travels through the extraction workspace; that temp file is
    /// removed whether or not the final write succeeds. The pending reference
    /// survives, so the same payload can be saved again.
    pub fn extract(&mut self, destination: impl AsRef<Path>) -> Result<PathBuf> {
        let destination = destination.as_ref();
        let reference = self.pending.as_ref().ok_or(IntakeError::NoPendingExtraction)?;

        let mut archive = self.reader.open(&reference.archive_path)?;
        let entry = archive
            .find_entry(&reference.payload_name)
            .ok_or_else(|| cidstamp_archive::Error::EntryNotFound(reference.payload_name.clone()))?;

        let identifier = self.workspace.scoped(|slot| -> Result<ContentId> {
            let extracted = archive.extract_to(&entry, slot.dir())?;
            let bytes = {
                let staged = slot.claim(extracted)?;
                tracing::debug!(path = %staged.display(), "payload staged for extraction");
                slot.read()?
            };
            cidstamp_fs::atomic_write(destination, &bytes)?;
            Ok(ContentId::of(&bytes))
        })?;

        if identifier != reference.identifier {
            tracing::warn!(
                archive = %reference.archive_path.display(),
                expected = %reference.identifier,
                actual = %identifier,
                "payload changed since intake"
            );
        }

        tracing::info!(
            payload = %reference.payload_name,
            destination = %destination.display(),
            "payload extracted"
        );
        Ok(destination.to_path_buf())
    }
}

impl<R: ArchiveReader + std::fmt::Debug> std::fmt::Debug for ExtractionSession<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractionSession")
            .field("reader", &self.reader)
            .field("workspace", &self.workspace)
            .field("pending", &self.pending)
            .finish()
    }
}
