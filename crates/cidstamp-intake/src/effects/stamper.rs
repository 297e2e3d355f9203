use std::path::Path;

use cidstamp_archive::{ArchiveReader, ZipReader};

use crate::data::{ExtractionOutcome, IntakeOptions, IntakeResult, ManifestReference};
use crate::effects::{ExtractionSession, FileIntake};

/// One intake pipeline and its extraction session behind a single handle.
///
/// Requests are served one at a time: both operations take `&mut self`.
pub struct Stamper<R: ArchiveReader + Clone = ZipReader> {
    intake:  FileIntake<R>,
    session: ExtractionSession<R>,
}

impl Stamper {
    pub fn new(options: IntakeOptions) -> Self {
        Self::with_reader(ZipReader, options)
    }
}

impl<R: ArchiveReader + Clone> Stamper<R> {
    pub fn with_reader(reader: R, options: IntakeOptions) -> Self {
        Self {
            intake:  FileIntake::new(reader.clone(), &options),
            session: ExtractionSession::new(reader, &options),
        }
    }

    pub fn process_file(&mut self, path: impl AsRef<Path>) -> IntakeResult {
        self.intake.intake(path, &mut self.session)
    }

    pub fn extract_file(&mut self, destination: impl AsRef<Path>) -> ExtractionOutcome {
        self.session.extract(destination).into()
    }

    pub fn pending(&self) -> Option<&ManifestReference> {
        self.session.pending()
    }
}
