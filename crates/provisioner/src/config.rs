use std::time::Duration;

use sandbox::{Resources, SandboxConfig};

use crate::error::{ProvisionError, ProvisionResult};

pub(crate) const TEAM_ID_VAR: &str = "SANDBOX_VERCEL_TEAM_ID";
pub(crate) const PROJECT_ID_VAR: &str = "SANDBOX_VERCEL_PROJECT_ID";
pub(crate) const TOKEN_VAR: &str = "SANDBOX_VERCEL_TOKEN";

/// Maximum machine lifetime; the only time bound on the whole procedure.
pub(crate) const SANDBOX_TIMEOUT: Duration = Duration::from_secs(30 * 60);
/// Execution runtime baked into the machine image.
pub(crate) const SANDBOX_RUNTIME: &str = "node24";
/// vCPUs requested for the install machine.
pub(crate) const SANDBOX_VCPUS: u32 = 4;

/// Control-plane credentials read from the process environment.
/// All three are required; there are no defaults.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub team_id: String,
    pub project_id: String,
    pub token: String,
}

impl Credentials {
    pub fn from_env() -> ProvisionResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve credentials through `lookup`, failing on the first missing or
    /// empty variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ProvisionResult<Self> {
        let var = |name: &str| {
            lookup(name).filter(|v| !v.is_empty()).ok_or_else(|| {
                ProvisionError::Config(format!("missing required environment variable: {name}"))
            })
        };
        Ok(Self {
            team_id: var(TEAM_ID_VAR)?,
            project_id: var(PROJECT_ID_VAR)?,
            token: var(TOKEN_VAR)?,
        })
    }

    /// Build the fixed machine-creation configuration around these
    /// credentials. Lifetime, runtime, and resources are constants.
    pub(crate) fn sandbox_config(self) -> SandboxConfig {
        SandboxConfig {
            team_id: self.team_id,
            project_id: self.project_id,
            token: self.token,
            timeout: SANDBOX_TIMEOUT,
            runtime: SANDBOX_RUNTIME.into(),
            resources: Resources {
                vcpus: SANDBOX_VCPUS,
            },
        }
    }
}
