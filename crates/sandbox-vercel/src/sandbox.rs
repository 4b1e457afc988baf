use async_trait::async_trait;
use sandbox::{Result, RunRequest, RunResult, Sandbox, SandboxError, Snapshot};
use tracing::debug;

use crate::http::HttpClient;
use crate::types::{RunCommandRequest, RunCommandResponse, SnapshotResponse};

/// Handle to a machine managed by the Vercel control plane.
#[derive(Debug)]
pub struct VercelSandbox {
    http: HttpClient,
    token: String,
    id: String,
}

impl VercelSandbox {
    pub(crate) fn new(http: HttpClient, token: String, id: String) -> Self {
        Self { http, token, id }
    }
}

#[async_trait]
impl Sandbox for VercelSandbox {
    fn id(&self) -> &str {
        &self.id
    }

    async fn run(&self, request: &RunRequest<'_>) -> Result<RunResult> {
        let path = format!("/v1/sandboxes/{}/commands", self.id);
        let body = RunCommandRequest {
            command: request.program,
            args: request.args,
        };

        debug!(sandbox_id = %self.id, program = %request.program, "running command");

        let resp = self
            .http
            .post(&path, &self.token)?
            .json(&body)
            .send()
            .await
            .map_err(|e| SandboxError::Transport(format!("run: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SandboxError::Transport(format!("run {status}: {body}")));
        }

        let run: RunCommandResponse = resp
            .json()
            .await
            .map_err(|e| SandboxError::Transport(format!("run decode: {e}")))?;

        // The contract carries a single combined output stream.
        let mut output = run.stdout;
        output.push_str(&run.stderr);

        Ok(RunResult {
            success: run.exit_code == 0,
            output,
        })
    }

    async fn snapshot(&self) -> Result<Snapshot> {
        let path = format!("/v1/sandboxes/{}/snapshot", self.id);

        let resp = self
            .http
            .post(&path, &self.token)?
            .send()
            .await
            .map_err(|e| SandboxError::SnapshotFailed(format!("snapshot: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SandboxError::SnapshotFailed(format!(
                "snapshot {status}: {body}"
            )));
        }

        let snap: SnapshotResponse = resp
            .json()
            .await
            .map_err(|e| SandboxError::SnapshotFailed(format!("snapshot decode: {e}")))?;

        Ok(Snapshot { id: snap.id })
    }

    async fn stop(self: Box<Self>) -> Result<()> {
        let path = format!("/v1/sandboxes/{}/stop", self.id);

        let resp = self
            .http
            .post(&path, &self.token)?
            .send()
            .await
            .map_err(|e| SandboxError::StopFailed(format!("stop: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SandboxError::StopFailed(format!("stop {status}: {body}")));
        }

        Ok(())
    }
}
