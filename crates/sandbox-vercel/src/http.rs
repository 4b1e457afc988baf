use std::sync::Arc;

use reqwest::Client;
use sandbox::{Result, SandboxError};
use url::Url;

/// Shared HTTP client for the sandbox control plane. Owns the connection
/// pool and base URL. Clone is a cheap Arc refcount bump.
///
/// No request timeout is configured: a command run blocks for the full
/// duration of the command (package installs take minutes), and the
/// machine's own lifetime bound is the only limit.
#[derive(Clone, Debug)]
pub(crate) struct HttpClient {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    pub(crate) fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SandboxError::InvalidConfig(format!("base url {base_url}: {e}")))?;
        let client = Client::builder()
            .build()
            .map_err(|e| SandboxError::Transport(format!("http client: {e}")))?;

        Ok(Self {
            inner: Arc::new(Inner { client, base_url }),
        })
    }

    /// Build a bearer-authenticated POST to `path` (e.g. `/v1/sandboxes`).
    pub(crate) fn post(&self, path: &str, token: &str) -> Result<reqwest::RequestBuilder> {
        let url = self
            .inner
            .base_url
            .join(path)
            .map_err(|e| SandboxError::InvalidConfig(format!("url {path}: {e}")))?;
        Ok(self.inner.client.post(url).bearer_auth(token))
    }
}
