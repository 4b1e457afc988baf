mod config;
mod error;
mod provision;
mod recipe;

use std::fmt;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use sandbox_vercel::VercelProvider;
use tracing_subscriber::fmt::time::FormatTime;

use crate::config::Credentials;
use crate::error::ProvisionResult;

struct Elapsed(Instant);

impl FormatTime for Elapsed {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let d = self.0.elapsed();
        let total_secs = d.as_secs();
        let mins = total_secs / 60;
        let secs = total_secs % 60;
        let millis = d.subsec_millis();
        write!(w, "[{mins:02}:{secs:02}:{millis:03}]")
    }
}

/// Provision a sandbox machine with the headless-browser runtime and
/// capture a reusable snapshot of it.
#[derive(Parser)]
#[command(name = "provisioner", version)]
struct Cli {
    /// Sandbox control-plane base URL.
    #[arg(long, env = "SANDBOX_API_URL", default_value = VercelProvider::DEFAULT_API_URL)]
    api_url: String,
}

async fn run(cli: Cli) -> ProvisionResult<String> {
    let credentials = Credentials::from_env()?;
    let provider = VercelProvider::new(&cli.api_url)?;
    provision::provision(&provider, credentials).await
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_timer(Elapsed(Instant::now()))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(snapshot_id) => {
            println!("Snapshot created: {snapshot_id}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
