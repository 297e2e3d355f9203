use std::fmt;
use std::path::PathBuf;

use cidstamp_verify::ContentId;
use serde::Serialize;

use crate::core::Preview;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeKind {
    /// Any file that is not a resolvable stamped archive.
    Plain,
    /// An archive whose manifest names a payload entry it contains.
    ManifestArchive,
}

impl fmt::Display for IntakeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeKind::Plain => write!(f, "plain"),
            IntakeKind::ManifestArchive => write!(f, "manifest archive"),
        }
    }
}

/// Outcome of a successful intake.
///
/// `payload_name` is present exactly when `kind` is
/// [`IntakeKind::ManifestArchive`]; the constructors are the only way to
/// build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntakeReport {
    kind:         IntakeKind,
    identifier:   ContentId,
    display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preview:      Option<Preview>,
}

impl IntakeReport {
    pub fn plain(display_name: impl Into<String>, identifier: ContentId, preview: Option<Preview>) -> Self {
        Self {
            kind: IntakeKind::Plain,
            identifier,
            display_name: display_name.into(),
            payload_name: None,
            preview,
        }
    }

    pub fn manifest_archive(
        display_name: impl Into<String>,
        identifier: ContentId,
        payload_name: impl Into<String>,
        preview: Option<Preview>,
    ) -> Self {
        Self {
            kind: IntakeKind::ManifestArchive,
            identifier,
            display_name: display_name.into(),
            payload_name: Some(payload_name.into()),
            preview,
        }
    }

    pub fn kind(&self) -> IntakeKind { self.kind }

    pub fn identifier(&self) -> &ContentId { &self.identifier }

    pub fn display_name(&self) -> &str { &self.display_name }

    pub fn payload_name(&self) -> Option<&str> { self.payload_name.as_deref() }

    pub fn preview(&self) -> Option<&Preview> { self.preview.as_ref() }
}

/// What one intake produced: a report or an error message, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IntakeResult {
    Report(IntakeReport),
    /// Serializes as `{"error": ...}` only, so the wire shape of a failure
    /// carries no field of a report.
    Failed {
        #[serde(skip_serializing)]
        display_name: String,
        error:        String,
    },
}

impl IntakeResult {
    pub fn failed(display_name: impl Into<String>, error: impl fmt::Display) -> Self {
        IntakeResult::Failed {
            display_name: display_name.into(),
            error:        error.to_string(),
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            IntakeResult::Report(report) => report.display_name(),
            IntakeResult::Failed { display_name, .. } => display_name,
        }
    }

    pub fn report(&self) -> Option<&IntakeReport> {
        match self {
            IntakeResult::Report(report) => Some(report),
            IntakeResult::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            IntakeResult::Report(_) => None,
            IntakeResult::Failed { error, .. } => Some(error),
        }
    }

    pub fn into_result(self) -> Result<IntakeReport, String> {
        match self {
            IntakeResult::Report(report) => Ok(report),
            IntakeResult::Failed { error, .. } => Err(error),
        }
    }
}

impl From<IntakeReport> for IntakeResult {
    fn from(report: IntakeReport) -> Self { IntakeResult::Report(report) }
}

/// Success/path or failure/message pair handed back after an extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path:    Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error:   Option<String>,
}

impl<E: fmt::Display> From<Result<PathBuf, E>> for ExtractionOutcome {
    fn from(result: Result<PathBuf, E>) -> Self {
        match result {
            Ok(path) => Self {
                success: true,
                path:    Some(path),
                error:   None,
            },
            Err(e) => Self {
                success: false,
                path:    None,
                error:   Some(e.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_report_has_no_payload() {
        let report = IntakeReport::plain("hello.txt", ContentId::of(b"hello"), None);
        assert_eq!(report.kind(), IntakeKind::Plain);
        assert_eq!(report.payload_name(), None);
    }

    #[test]
    fn archive_report_has_payload() {
        let report =
            IntakeReport::manifest_archive("stamp.zip", ContentId::of(b"p"), "photo.jpg", None);
        assert_eq!(report.kind(), IntakeKind::ManifestArchive);
        assert_eq!(report.payload_name(), Some("photo.jpg"));
    }

    #[test]
    fn failed_result_carries_only_error() {
        let result = IntakeResult::failed("broken.bin", "boom");
        assert!(result.report().is_none());
        assert_eq!(result.error(), Some("boom"));
        assert_eq!(result.display_name(), "broken.bin");
        assert_eq!(result.into_result(), Err("boom".to_string()));
    }

    #[test]
    fn serialized_shapes() {
        let report = IntakeReport::plain("hello.txt", ContentId::of(b"hello"), None);
        let json = serde_json::to_value(IntakeResult::from(report)).unwrap();
        assert_eq!(json["kind"], "plain");
        assert_eq!(json["identifier"], "QmWfVY9y3xjsixTgbd9AorQxH7VtMpzfx2HaWtsoUYecaX");
        assert_eq!(json["display_name"], "hello.txt");
        assert!(json.get("payload_name").is_none());
        assert!(json.get("error").is_none());

        let failed = serde_json::to_value(IntakeResult::failed("x", "nope")).unwrap();
        assert_eq!(failed, serde_json::json!({ "error": "nope" }));
    }

    #[test]
    fn extraction_outcome_from_result() {
        let ok = ExtractionOutcome::from(Ok::<_, String>(PathBuf::from("/tmp/out.jpg")));
        assert!(ok.success);
        assert_eq!(ok.path.as_deref(), Some(std::path::Path::new("/tmp/out.jpg")));

        let err = ExtractionOutcome::from(Err::<PathBuf, _>("disk full"));
        assert!(!err.success);
        assert_eq!(err.error.as_deref(), Some("disk full"));
    }
}
