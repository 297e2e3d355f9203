use std::path::Path;

use cidstamp_archive::{Archive, ArchiveReader, ZipReader, resolve_manifest};
use cidstamp_fs::TempWorkspace;
use cidstamp_verify::ContentId;

use crate::PREVIEW_PURPOSE;
use crate::core::{display_name, is_archive_name, preview_for};
use crate::data::{IntakeOptions, IntakeReport, IntakeResult, ManifestReference};
use crate::effects::ExtractionSession;
use crate::error::Result;

/// Turns an input path into an [`IntakeResult`].
///
/// Files whose names carry an archive extension are opened and checked for a
/// manifest. Anything that does not resolve to a payload, including files that
/// only look like archives, is identified as a plain file.
pub struct FileIntake<R: ArchiveReader = ZipReader> {
    reader:             R,
    archive_extensions: Vec<String>,
    workspace:          TempWorkspace,
}

impl<R: ArchiveReader> FileIntake<R> {
    pub fn new(reader: R, options: &IntakeOptions) -> Self {
        Self {
            reader,
            archive_extensions: options.archive_extensions.clone(),
            workspace: TempWorkspace::new(options.temp_root_path(), PREVIEW_PURPOSE),
        }
    }

    /// Identify the file at `path` and update `session` to match.
    ///
    /// A stamped archive replaces the pending extraction in `session`. A plain
    /// file or a failure clears it.
    pub fn intake<S: ArchiveReader>(
        &self,
        path: impl AsRef<Path>,
        session: &mut ExtractionSession<S>,
    ) -> IntakeResult {
        let path = path.as_ref();
        let name = display_name(path);

        let bytes = match cidstamp_fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "intake failed");
                session.clear();
                return IntakeResult::failed(name, e);
            }
        };

        if is_archive_name(&name, &self.archive_extensions) {
            match self.intake_archive(path, &name) {
                Ok(Some((report, reference))) => {
                    tracing::info!(
                        file = %name,
                        payload = %reference.payload_name,
                        cid = %report.identifier(),
                        "stamped archive"
                    );
                    session.replace(reference);
                    return report.into();
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "intake failed");
                    session.clear();
                    return IntakeResult::failed(name, e);
                }
            }
        }

        session.clear();
        let identifier = ContentId::of(&bytes);
        let preview = preview_for(&name, &bytes);
        tracing::info!(file = %name, cid = %identifier, "plain file");
        IntakeReport::plain(name, identifier, preview).into()
    }

    /// `Ok(None)` means "treat as plain". Errors only come from handling a
    /// payload that was already resolved.
    fn intake_archive(
        &self,
        path: &Path,
        name: &str,
    ) -> Result<Option<(IntakeReport, ManifestReference)>> {
        let mut archive = match self.reader.open(path) {
            Ok(archive) => archive,
            Err(e) => {
                log_unusable(name, &e, "unreadable archive, treating as plain");
                return Ok(None);
            }
        };

        let payload = match resolve_manifest(&mut archive) {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                tracing::debug!(file = name, "no resolvable manifest, treating as plain");
                return Ok(None);
            }
            Err(e) => {
                log_unusable(name, &e, "manifest unreadable, treating as plain");
                return Ok(None);
            }
        };

        let bytes = self.workspace.scoped(|slot| -> Result<Vec<u8>> {
            let extracted = archive.extract_to(&payload.entry, slot.dir())?;
            slot.claim(extracted)?;
            Ok(slot.read()?)
        })?;

        let identifier = ContentId::of(&bytes);
        let preview = preview_for(payload.name(), &bytes);
        let reference = ManifestReference {
            archive_path: path.to_path_buf(),
            payload_name: payload.name().to_string(),
            identifier:   identifier.clone(),
        };
        let report = IntakeReport::manifest_archive(name, identifier, payload.name(), preview);
        Ok(Some((report, reference)))
    }
}

/// Malformed input is expected here; anything else (I/O) is worth surfacing.
fn log_unusable(name: &str, e: &cidstamp_archive::Error, msg: &str) {
    if e.is_malformed() {
        tracing::debug!(file = name, error = %e, "{msg}");
    } else {
        tracing::warn!(file = name, error = %e, "{msg}");
    }
}
