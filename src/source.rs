//! Reading the code file a problem set is built from.

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// File extensions accepted as problem sources.
pub const SUPPORTED_EXTENSIONS: [&str; 10] = [
    ".js", ".jsx", ".ts", ".tsx", ".go", ".py", ".java", ".html", ".c", ".cpp",
];

/// Whether `path` ends in one of [`SUPPORTED_EXTENSIONS`] (case-insensitive).
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
        .is_some_and(|e| SUPPORTED_EXTENSIONS.contains(&e.as_str()))
}

/// Read a source file as UTF-8 text, rejecting unsupported extensions
/// before touching the disk.
pub fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if !is_supported(path) {
        return Err(Error::UnsupportedSourceFile(format!(
            "{} (supported extensions: {})",
            path.display(),
            SUPPORTED_EXTENSIONS.join(", ")
        )));
    }
    let code = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = code.len(), "read source file");
    Ok(code)
}
