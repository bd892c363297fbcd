use std::path::PathBuf;

/// Context passed throughout the application containing global configuration
#[derive(Clone)]
pub struct Context {
    /// Enable verbose output (show per-file detail during the archive write)
    pub verbose: bool,

    /// Path to the extension's package.json
    pub package_json: PathBuf,

    /// Extension root (directory containing package.json)
    pub base_dir: PathBuf,
}

impl Context {
    pub fn new(package_json: PathBuf, verbose: bool) -> Self {
        let base_dir = package_json
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            verbose,
            package_json,
            base_dir,
        }
    }
}
