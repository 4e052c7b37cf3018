use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum WelldocError {
    #[error("failed to load ruleset from {path}: {reason}")]
    RulesetLoad { path: PathBuf, reason: String },

    #[error("invalid ruleset: {0}")]
    RulesetInvalid(String),

    #[error("failed to render diagram: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
