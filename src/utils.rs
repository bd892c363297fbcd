use crate::result::Result;
use std::path::{Path, PathBuf};

/// Find package.json in the current directory or specified path
pub fn find_package_json(path: Option<&Path>) -> Result<PathBuf> {
    let base_path = path
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::current_dir().unwrap());

    let manifest_path = if base_path.is_file() {
        base_path
    } else {
        base_path.join("package.json")
    };

    if !manifest_path.exists() {
        return Err(crate::error::Error::ConfigNotFound(manifest_path));
    }

    Ok(manifest_path)
}

/// Render a relative path with forward-slash separators for archive entry names
pub fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
