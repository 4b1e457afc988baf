use async_trait::async_trait;
use sandbox::{Result, Sandbox, SandboxConfig, SandboxError, SandboxProvider};
use tracing::info;

use crate::http::HttpClient;
use crate::sandbox::VercelSandbox;
use crate::types::{CreateSandboxRequest, CreateSandboxResponse};

/// [`SandboxProvider`] backed by the Vercel sandbox control plane.
#[derive(Debug)]
pub struct VercelProvider {
    http: HttpClient,
}

impl VercelProvider {
    /// Production control-plane URL.
    pub const DEFAULT_API_URL: &'static str = "https://api.vercel.com";

    pub fn new(api_url: &str) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(api_url)?,
        })
    }
}

#[async_trait]
impl SandboxProvider for VercelProvider {
    fn name(&self) -> &str {
        "vercel"
    }

    async fn create(&self, config: SandboxConfig) -> Result<Box<dyn Sandbox>> {
        let body = CreateSandboxRequest {
            team_id: &config.team_id,
            project_id: &config.project_id,
            timeout_ms: config.timeout.as_millis() as u64,
            runtime: &config.runtime,
            vcpus: config.resources.vcpus,
        };

        let resp = self
            .http
            .post("/v1/sandboxes", &config.token)?
            .json(&body)
            .send()
            .await
            .map_err(|e| SandboxError::CreationFailed(format!("create: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SandboxError::CreationFailed(format!(
                "create {status}: {body}"
            )));
        }

        let created: CreateSandboxResponse = resp
            .json()
            .await
            .map_err(|e| SandboxError::CreationFailed(format!("create decode: {e}")))?;

        info!(sandbox_id = %created.id, runtime = %config.runtime, "sandbox created");

        Ok(Box::new(VercelSandbox::new(
            self.http.clone(),
            config.token,
            created.id,
        )))
    }
}
