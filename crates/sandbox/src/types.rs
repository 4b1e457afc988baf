/// A single command invocation inside a sandbox.
pub struct RunRequest<'a> {
    pub program: &'a str,
    pub args: &'a [&'a str],
}

/// Outcome of a command run: whether it exited successfully plus its
/// combined output.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub success: bool,
    pub output: String,
}

/// A captured machine image, referenced later by its identifier.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub id: String,
}
