#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    #[error("config error: {0}")]
    Config(String),

    #[error("provisioning step failed: {0}")]
    StepFailed(String),

    #[error("sandbox error: {0}")]
    Sandbox(#[from] sandbox::SandboxError),
}

pub type ProvisionResult<T> = Result<T, ProvisionError>;
