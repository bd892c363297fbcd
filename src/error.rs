use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("package.json not found at {}. Are you in the extension root?", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("package.json is not valid JSON: {0}")]
    ConfigMalformed(#[from] serde_json::Error),

    #[error("package.json must declare both `name` and `version`")]
    MissingRequiredField,

    #[error("Compiled entry '{0}' was not found. Run `npm run compile` first.")]
    MissingBuildArtifact(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}
