use std::path::Path;

use crate::types::Language;

/// Detect the source language of a file from its extension alone
pub fn detect_language(file_path: &Path) -> Option<Language> {
    tracing::trace!("Detecting language for: {:?}", file_path);

    let language = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(Language::from_extension);

    match language {
        Some(language) => tracing::debug!("Detected {} source: {:?}", language, file_path),
        None => tracing::debug!("No supported language for: {:?}", file_path),
    }
    language
}

/// Base name of a file without its extension, e.g. `Main` for `src/Main.java`
pub fn file_stem(file_path: &Path) -> Option<String> {
    file_path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Directory containing `file_path`, or `.` for a bare file name
pub fn parent_dir(file_path: &Path) -> &Path {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Path usable as a program name: bare file names get a `./` prefix so they
/// are not looked up on `PATH`
pub fn executable_path(file_path: &Path) -> String {
    if file_path.is_absolute() || file_path.components().count() > 1 {
        file_path.to_string_lossy().into_owned()
    } else {
        Path::new(".").join(file_path).to_string_lossy().into_owned()
    }
}
