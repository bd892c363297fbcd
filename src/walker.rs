use crate::context::Context;
use crate::result::Result;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directories that should never ship in the final VSIX bundle.
const IGNORED_DIRS: &[&str] = &[".git", "node_modules", "tmp", "tmp_vsix", "__pycache__"];

/// OS metadata files excluded wherever they appear.
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// In-tree packaging helper that must not end up inside its own output.
const PACKAGER_SCRIPT: &str = "scripts/package_vsix.py";

fn is_ignored(entry: &DirEntry) -> bool {
    // Never test the walk root itself; only names below it count.
    if entry.depth() == 0 {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    if IGNORED_DIRS.contains(&name.as_ref()) {
        return true;
    }
    entry.file_type().is_file() && IGNORED_FILES.contains(&name.as_ref())
}

/// Walk the extension root and collect every file that belongs in the
/// package, as sorted root-relative paths. Ignored directories are pruned
/// before descent.
pub fn collect_files(ctx: &Context) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(&ctx.base_dir)
        .into_iter()
        .filter_entry(|e| !is_ignored(e))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(&ctx.base_dir).unwrap();
        if relative == Path::new(PACKAGER_SCRIPT) {
            continue;
        }
        files.push(relative.to_path_buf());
    }

    files.sort();
    Ok(files)
}
