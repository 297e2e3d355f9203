//! Payload classification and inline previews.
//!
//! Classification is by file extension only. Bytes are never decoded, so a
//! corrupt file with an image extension still gets a (broken) preview.

use std::fmt;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Serialize, Serializer};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// A self-contained `data:` URI that a display surface can render directly.
#[derive(Clone, PartialEq, Eq)]
pub struct Preview {
    mime:     &'static str,
    data_uri: String,
}

impl Preview {
    pub fn mime(&self) -> &'static str { self.mime }

    pub fn data_uri(&self) -> &str { &self.data_uri }
}

impl fmt::Debug for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preview")
            .field("mime", &self.mime)
            .field("len", &self.data_uri.len())
            .finish()
    }
}

impl Serialize for Preview {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.data_uri)
    }
}

fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
}

/// Whether `name` carries an image extension (png, jpg, jpeg; any case).
pub fn is_image(name: &str) -> bool {
    extension_of(name).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

fn mime_for(extension: &str) -> &'static str {
    match extension.trim_start_matches('.').to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}

/// Encode `bytes` as a base64 data URI typed by `extension_hint`.
pub fn preview(bytes: &[u8], extension_hint: &str) -> Preview {
    let mime = mime_for(extension_hint);
    Preview {
        mime,
        data_uri: format!("data:{mime};base64,{}", STANDARD.encode(bytes)),
    }
}

/// Preview for `bytes` named `name`, if `name` is an image.
pub fn preview_for(name: &str, bytes: &[u8]) -> Option<Preview> {
    if !is_image(name) {
        return None;
    }
    let extension = extension_of(name)?;
    Some(preview(bytes, &extension))
}
