use sandbox::{RunRequest, RunResult, Sandbox, SandboxProvider};
use tracing::{info, warn};

use crate::config::Credentials;
use crate::error::{ProvisionError, ProvisionResult};
use crate::recipe::{self, Command, FailurePolicy, Step};

/// Run the whole provisioning procedure: create a machine from the fixed
/// configuration, execute the recipe, snapshot, stop, and return the
/// snapshot identifier.
///
/// A fatal error after creation leaves the machine running; its lifetime
/// bound reclaims it (see DESIGN.md).
pub async fn provision(
    provider: &dyn SandboxProvider,
    credentials: Credentials,
) -> ProvisionResult<String> {
    let config = credentials.sandbox_config();

    info!(
        provider = provider.name(),
        runtime = %config.runtime,
        vcpus = config.resources.vcpus,
        "creating sandbox"
    );
    let sandbox = provider.create(config).await?;
    info!(sandbox_id = sandbox.id(), "sandbox ready");

    for step in recipe::steps() {
        run_step(sandbox.as_ref(), &step).await?;
    }

    info!("creating snapshot");
    let snapshot = sandbox.snapshot().await?;

    info!(snapshot_id = %snapshot.id, "stopping sandbox");
    sandbox.stop().await?;

    Ok(snapshot.id)
}

/// Execute one step, trying each attempt in order until one succeeds.
/// Exhausting all attempts is fatal or logged-through per the step policy.
async fn run_step(sandbox: &dyn Sandbox, step: &Step) -> ProvisionResult<()> {
    info!(step = step.label, "running step");

    let mut failure: Option<RunResult> = None;
    for (attempt, command) in step.attempts.iter().enumerate() {
        let result = run_command(sandbox, command).await?;
        if result.success {
            return Ok(());
        }
        warn!(
            step = step.label,
            attempt,
            output = %result.output.trim(),
            "step attempt failed"
        );
        failure = Some(result);
    }

    match step.policy {
        FailurePolicy::Continue => {
            info!(step = step.label, "continuing past best-effort failure");
            Ok(())
        }
        FailurePolicy::Fatal => {
            let output = failure.map(|r| r.output).unwrap_or_default();
            Err(ProvisionError::StepFailed(format!(
                "{}: {}",
                step.label,
                output.trim()
            )))
        }
    }
}

/// Run a single command inside the machine. A non-zero exit comes back in
/// the result; only transport faults surface as errors.
async fn run_command(sandbox: &dyn Sandbox, command: &Command) -> ProvisionResult<RunResult> {
    let args: Vec<&str> = command.args.iter().map(String::as_str).collect();
    let result = sandbox
        .run(&RunRequest {
            program: &command.program,
            args: &args,
        })
        .await?;
    Ok(result)
}
