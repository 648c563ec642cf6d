//! File-path resolution for command arguments.

use std::path::Path;

/// Resolve a possibly-relative path to fully-qualified form.
///
/// Absolute paths pass through unchanged; relative paths are rooted at the
/// current working directory. If the working directory cannot be determined
/// the path is passed through as-is and the external tool resolves it.
pub fn resolve(path: &str) -> String {
    let p = Path::new(path);
    if p.is_absolute() {
        return path.to_string();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(p).to_string_lossy().into_owned(),
        Err(_) => path.to_string(),
    }
}
