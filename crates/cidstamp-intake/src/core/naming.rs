use std::path::Path;

/// Base name of `path` as shown to the user.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Whether `name` ends in one of `extensions` (dot-separated, any case).
///
/// Multi-part extensions such as `zip.stamp` match `bundle.zip.stamp`. A name
/// that is only the extension (`.zip`) does not match.
pub fn is_archive_name<S: AsRef<str>>(name: &str, extensions: &[S]) -> bool {
    let lower = name.to_ascii_lowercase();
    extensions.iter().any(|ext| {
        let ext = ext.as_ref().trim_start_matches('.').to_ascii_lowercase();
        !ext.is_empty()
            && lower
                .strip_suffix(ext.as_str())
                .and_then(|stem| stem.strip_suffix('.'))
                .is_some_and(|stem| !stem.is_empty())
    })
}
