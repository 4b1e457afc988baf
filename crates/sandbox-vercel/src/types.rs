use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateSandboxRequest<'a> {
    pub team_id: &'a str,
    pub project_id: &'a str,
    pub timeout_ms: u64,
    pub runtime: &'a str,
    pub vcpus: u32,
}

#[derive(Deserialize)]
pub(crate) struct CreateSandboxResponse {
    pub id: String,
}

#[derive(Serialize)]
pub(crate) struct RunCommandRequest<'a> {
    pub command: &'a str,
    pub args: &'a [&'a str],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RunCommandResponse {
    pub exit_code: i32,
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
}

#[derive(Deserialize)]
pub(crate) struct SnapshotResponse {
    pub id: String,
}
