use async_trait::async_trait;

use crate::error::Result;
use crate::types::{RunRequest, RunResult, Snapshot};

/// Handle to a running provider-managed machine.
///
/// `stop` takes the handle by value: once a machine is stopped, no further
/// operation can be issued through it.
#[async_trait]
pub trait Sandbox: Send + Sync + std::fmt::Debug {
    /// Provider-assigned machine identifier.
    fn id(&self) -> &str;

    /// Run a single command inside the machine and wait for it to finish.
    ///
    /// A non-zero exit is reported through [`RunResult::success`], not as an
    /// error; `Err` is reserved for transport-level faults.
    async fn run(&self, request: &RunRequest<'_>) -> Result<RunResult>;

    /// Capture a reusable image of the machine's current state.
    async fn snapshot(&self) -> Result<Snapshot>;

    /// Stop the machine. Always the last operation on a handle.
    async fn stop(self: Box<Self>) -> Result<()>;
}
