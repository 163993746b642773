use std::path::PathBuf;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum DeployError {
    #[error("migration file not found: {}", .path.display())]
    ScriptNotFound { path: PathBuf },

    #[error("invalid migration file name: {name}")]
    InvalidScriptName { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}
