use crate::context::Context;
use crate::result::Result;
use crate::utils;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

/// Archive entry name of the generated package manifest.
pub const MANIFEST_ENTRY: &str = "extension.vsixmanifest";

/// Archive entry name of the generated content-type registry.
pub const CONTENT_TYPES_ENTRY: &str = "[Content_Types].xml";

/// Folder every packaged file is rooted under inside the archive.
pub const PACKAGE_ROOT: &str = "extension";

/// Write the VSIX archive: both generated documents at the archive root,
/// then every collected file under the package root folder.
pub fn write(
    ctx: &Context,
    output: &Path,
    manifest_xml: &str,
    content_types_xml: &str,
    files: &[PathBuf],
) -> Result<()> {
    let file = File::create(output)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<()> = FileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(MANIFEST_ENTRY, options)?;
    zip.write_all(manifest_xml.as_bytes())?;

    zip.start_file(CONTENT_TYPES_ENTRY, options)?;
    zip.write_all(content_types_xml.as_bytes())?;

    for relative in files {
        let entry_name = format!("{}/{}", PACKAGE_ROOT, utils::slash_path(relative));
        if ctx.verbose {
            println!("Adding {}", entry_name);
        }

        zip.start_file(entry_name, options)?;
        let mut f = File::open(ctx.base_dir.join(relative))?;
        let mut buffer = Vec::new();
        f.read_to_end(&mut buffer)?;
        zip.write_all(&buffer)?;
    }

    zip.finish()?;
    Ok(())
}
