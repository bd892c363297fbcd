use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Entry point checked when package.json declares no `main` field.
pub const DEFAULT_ENTRY: &str = "out/extension.js";

/// Extension metadata parsed from package.json.
///
/// Unknown fields are ignored; package.json carries far more than the
/// packaging-relevant subset modeled here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub publisher: Option<String>,

    #[serde(default)]
    pub main: Option<String>,

    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub categories: Vec<String>,

    #[serde(default)]
    pub engines: Engines,

    #[serde(default)]
    pub extension_dependencies: Vec<String>,

    #[serde(default)]
    pub extension_pack: Vec<String>,

    #[serde(default)]
    pub extension_kind: Option<ExtensionKind>,

    #[serde(default)]
    pub contributes: Contributes,
}

#[derive(Debug, Deserialize, Default)]
pub struct Engines {
    #[serde(default)]
    pub vscode: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Contributes {
    #[serde(default)]
    pub localizations: Vec<Localization>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Localization {
    #[serde(default)]
    pub language_id: Option<String>,
}

/// `extensionKind` accepts either a single string or a list of strings.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum ExtensionKind {
    One(String),
    Many(Vec<String>),
}

impl ExtensionKind {
    pub fn as_value(&self) -> String {
        match self {
            ExtensionKind::One(kind) => kind.clone(),
            ExtensionKind::Many(kinds) => kinds.join(","),
        }
    }
}

impl Metadata {
    /// Load and parse metadata from the extension's package.json
    pub fn load(ctx: &Context) -> Result<Self> {
        let content = fs::read_to_string(&ctx.package_json).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                Error::ConfigNotFound(ctx.package_json.clone())
            } else {
                Error::Io(e)
            }
        })?;
        let metadata: Metadata = serde_json::from_str(&content)?;
        Ok(metadata)
    }

    /// Relative path of the compiled entry point
    pub fn entry_point(&self) -> &str {
        self.main.as_deref().unwrap_or(DEFAULT_ENTRY)
    }

    /// Verify the compiled entry point exists under the extension root
    pub fn ensure_compiled_entry(&self, ctx: &Context) -> Result<PathBuf> {
        let entry = self.entry_point();
        let entry_path = ctx.base_dir.join(entry);
        if !entry_path.exists() {
            return Err(Error::MissingBuildArtifact(entry.to_string()));
        }
        Ok(entry_path)
    }

    /// Resolve the destination path for the generated VSIX file.
    ///
    /// An explicit override wins; otherwise the file lands in the extension
    /// root as `<name>-<version>.vsix`.
    pub fn resolve_output_path(&self, ctx: &Context, output: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(output) = output {
            return Ok(output);
        }
        let (name, version) = match (self.name.as_deref(), self.version.as_deref()) {
            (Some(name), Some(version)) if !name.is_empty() && !version.is_empty() => {
                (name, version)
            }
            _ => return Err(Error::MissingRequiredField),
        };
        Ok(ctx.base_dir.join(format!("{}-{}.vsix", name, version)))
    }

    /// Language identifiers of every localization contribution
    pub fn localized_languages(&self) -> Vec<&str> {
        self.contributes
            .localizations
            .iter()
            .filter_map(|entry| entry.language_id.as_deref())
            .collect()
    }
}
