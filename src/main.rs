mod archive;
mod args;
mod content_types;
mod context;
mod error;
mod manifest;
mod result;
mod utils;
mod vsixmanifest;
mod walker;
mod xml;

use args::Args;
use context::Context;
use manifest::Metadata;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    // Parse command-line arguments
    let Args {
        verbose,
        output,
        path,
    } = Args::parse();

    // Find package.json
    let package_json = utils::find_package_json(path.as_deref())?;

    // Create context
    let ctx = Context::new(package_json, verbose);

    cliclack::intro("vsix-pack")?;

    // Load metadata
    let metadata = {
        let spinner = cliclack::spinner();
        spinner.start("Loading package.json...");
        match Metadata::load(&ctx) {
            Ok(m) => {
                spinner.stop(format!(
                    "Loaded metadata for {}",
                    m.name.as_deref().unwrap_or("extension")
                ));
                m
            }
            Err(e) => {
                spinner.error("Failed to load package.json");
                return Err(e);
            }
        }
    };

    let output_path = metadata.resolve_output_path(&ctx, output)?;

    // The compiled entry point gates everything else
    metadata.ensure_compiled_entry(&ctx)?;

    // Collect the files that belong in the package
    let files = {
        let spinner = cliclack::spinner();
        spinner.start("Collecting extension files...");
        let files = walker::collect_files(&ctx)?;
        spinner.stop(format!("Collected {} files", files.len()));
        files
    };

    // Generate both XML documents, then write the archive
    let manifest_xml = vsixmanifest::build(&metadata);
    let content_types_xml = content_types::build(&content_types::resolve(&files));

    let spinner = cliclack::spinner();
    spinner.start("Writing VSIX archive...");
    archive::write(&ctx, &output_path, &manifest_xml, &content_types_xml, &files)?;
    spinner.stop("Archive written");

    cliclack::outro(format!("VSIX created at {}", output_path.display()))?;
    Ok(())
}
