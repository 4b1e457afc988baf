use async_trait::async_trait;

use crate::config::SandboxConfig;
use crate::error::Result;
use crate::sandbox::Sandbox;

#[async_trait]
pub trait SandboxProvider: Send + Sync {
    /// Human-readable name for this provider implementation (e.g. "vercel").
    fn name(&self) -> &str;
    /// Create a new sandbox machine with the given configuration.
    async fn create(&self, config: SandboxConfig) -> Result<Box<dyn Sandbox>>;
}
