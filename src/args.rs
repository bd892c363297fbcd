use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for the vsix-pack tool
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Override output path for the generated VSIX file
    pub output: Option<PathBuf>,

    /// Path to package.json or directory containing it
    pub path: Option<PathBuf>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let matches = Command::new("vsix-pack")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Package a VS Code extension into a VSIX archive")
            .arg(
                Arg::new("output")
                    .short('o')
                    .long("output")
                    .value_name("FILE")
                    .help("Override output path for the generated VSIX file")
            )
            .arg(
                Arg::new("path")
                    .short('p')
                    .long("path")
                    .value_name("PATH")
                    .help("Path to package.json or directory containing it")
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output")
            )
            .get_matches();

        Self {
            verbose: matches.get_flag("verbose"),
            output: matches.get_one::<String>("output").map(PathBuf::from),
            path: matches.get_one::<String>("path").map(PathBuf::from),
        }
    }
}
