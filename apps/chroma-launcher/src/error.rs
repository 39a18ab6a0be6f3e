use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Server executable not found: `{0}`")]
    ExecutableNotFound(String),

    #[error("Failed to start `{executable}`: {source}")]
    Spawn {
        executable: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Chroma server failed: `{command}` ({status})")]
    ServerFailed { command: String, status: ExitStatus },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LaunchError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::ServerFailed { .. } => 1,
            Self::Config(_) => 3,
            Self::Serialization(_) => 10,
            Self::Spawn { .. } => 126,
            Self::ExecutableNotFound(_) => 127,
        }
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;
