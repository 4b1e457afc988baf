#[derive(Debug, thiserror::Error)]
pub enum SandboxError {
    #[error("sandbox creation failed: {0}")]
    CreationFailed(String),

    #[error("command execution failed: {0}")]
    ExecFailed(String),

    #[error("snapshot failed: {0}")]
    SnapshotFailed(String),

    #[error("sandbox stop failed: {0}")]
    StopFailed(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SandboxError>;
