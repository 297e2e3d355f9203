//! Filesystem-facing intake and extraction.
//!
//! Everything that reads input files, opens archives, or touches the temp
//! workspaces lives here. Classification decisions are delegated to
//! [`crate::core`].

mod intake;
mod session;
mod stamper;

pub use intake::FileIntake;
pub use session::ExtractionSession;
pub use stamper::Stamper;
