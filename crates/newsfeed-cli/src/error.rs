use newsfeed_core::NewsError;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    News(#[from] NewsError),

    #[error("upstream error {code}: {message}")]
    Upstream { code: String, message: String },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::News(NewsError::Request(_)) => 2,
            Self::Upstream { .. } => 3,
            Self::News(NewsError::Transport(_) | NewsError::Decode(_))
            | Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
