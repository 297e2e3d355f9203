//! File intake and payload extraction for stamped archives.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Results, options, and session state
//! - [`core`] - Pure classification (archive names, image payloads, previews)
//! - [`effects`] - Intake and extraction against the filesystem
//!
//! # Flow
//!
//! A caller hands [`FileIntake::intake`] a path and gets an [`IntakeResult`].
//! When that result describes a stamped archive, the [`ExtractionSession`]
//! remembers which archive and entry it came from; a later
//! [`ExtractionSession::extract`] saves that payload to a chosen destination.
//! [`Stamper`] owns one of each for callers that want a single handle.

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use crate::core::{Preview, display_name, is_archive_name, is_image, preview, preview_for};
pub use data::{ExtractionOutcome, IntakeKind, IntakeOptions, IntakeReport, IntakeResult, ManifestReference};
pub use effects::{ExtractionSession, FileIntake, Stamper};
pub use error::{IntakeError, Result};

/// Temp workspace purpose for payloads extracted while building a preview.
pub const PREVIEW_PURPOSE: &str = "preview";

/// Temp workspace purpose for payloads on their way to a user destination.
pub const EXTRACTION_PURPOSE: &str = "extraction";
