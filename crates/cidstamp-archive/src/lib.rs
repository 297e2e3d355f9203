//! Archive access and manifest-designated payload resolution.
//!
//! # Architecture
//!
//! - `reader.rs` - [`ArchiveReader`] / [`Archive`] traits and [`EntryRef`]
//! - `zip.rs` - zip-backed implementation
//! - `manifest.rs` - `manifest.txt` lookup and payload resolution
//! - `sanitize.rs` - entry name to output file name
//!
//! The container library only appears in `zip.rs`; callers work through the
//! traits.

pub use error::{Error, Result};
pub use manifest::{MANIFEST_ENTRY, PayloadRef, parse_manifest, resolve as resolve_manifest};
pub use reader::{Archive, ArchiveReader, EntryRef};
pub use sanitize::entry_file_name;

#[cfg(feature = "zip")]
pub use self::zip::{ZipArchive, ZipReader};

mod error;
mod manifest;
mod reader;
mod sanitize;
#[cfg(feature = "zip")]
mod zip;
