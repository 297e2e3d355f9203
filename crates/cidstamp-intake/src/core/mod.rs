//! Pure classification: no I/O happens here.

mod inspect;
mod naming;

pub use inspect::{Preview, is_image, preview, preview_for};
pub use naming::{display_name, is_archive_name};
