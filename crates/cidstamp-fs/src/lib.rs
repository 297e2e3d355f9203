//! Purpose-scoped temporary file slots.
//!
//! A [`TempWorkspace`] owns one directory per purpose (for example `preview`
//! and `extraction`) so that unrelated activities never contend for the same
//! file name. The directory is created on first use and left in place; each
//! [`TempSlot`] removes the file it claimed when it goes out of scope, on the
//! success path and the error path alike.

mod error;
mod rw;
mod workspace;

pub use error::{Error, Result};
pub use rw::{atomic_write, read};
pub use workspace::{TempSlot, TempWorkspace};
