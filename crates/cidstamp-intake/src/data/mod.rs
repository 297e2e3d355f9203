//! Data layer: immutable results, intake options, and session state.

mod options;
mod reference;
mod result;

pub use options::IntakeOptions;
pub use reference::ManifestReference;
pub use result::{ExtractionOutcome, IntakeKind, IntakeReport, IntakeResult};
