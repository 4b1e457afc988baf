//! The fixed provisioning recipe: ordered steps with per-step failure
//! policy, executed by the generic runner in [`crate::provision`].

/// Foundational libraries the headless browser cannot start without.
pub(crate) const CRITICAL_PACKAGES: [&str; 2] = ["nss", "nspr"];

/// Display and accessibility toolkit libraries.
const DISPLAY_PACKAGES: [&str; 4] = ["libxkbcommon", "atk", "at-spi2-atk", "at-spi2-core"];

/// X-windowing libraries.
const X11_PACKAGES: [&str; 9] = [
    "libXcomposite",
    "libXdamage",
    "libXrandr",
    "libXfixes",
    "libXcursor",
    "libXi",
    "libXtst",
    "libXScrnSaver",
    "libXext",
];

/// Graphics and driver libraries.
const GRAPHICS_PACKAGES: [&str; 4] = ["mesa-libgbm", "libdrm", "mesa-libGL", "mesa-libEGL"];

/// Audio, printing, and UI libraries.
const MISC_PACKAGES: [&str; 6] = ["cups-libs", "alsa-lib", "pango", "cairo", "gtk3", "dbus-libs"];

/// CLI package installed globally into the machine.
pub(crate) const BROWSER_CLI_PACKAGE: &str = "agent-browser";

/// What a step failure means for the rest of the procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailurePolicy {
    /// Log the failure and move on.
    Continue,
    /// Abort provisioning.
    Fatal,
}

/// One command invocation inside the machine.
#[derive(Debug, Clone)]
pub(crate) struct Command {
    pub program: String,
    pub args: Vec<String>,
}

impl Command {
    /// Run `script` through the shell with stderr folded into stdout.
    fn shell(script: &str) -> Self {
        Self {
            program: "sh".into(),
            args: vec!["-c".into(), format!("{script} 2>&1")],
        }
    }
}

/// A provisioning step. Attempts are tried in order until one succeeds;
/// later attempts differ from the first only by modifier flags.
#[derive(Debug, Clone)]
pub(crate) struct Step {
    pub label: &'static str,
    pub attempts: Vec<Command>,
    pub policy: FailurePolicy,
}

/// The deduplicated union of the best-effort package groups.
pub(crate) fn bulk_packages() -> Vec<&'static str> {
    let mut packages = Vec::new();
    for group in [
        DISPLAY_PACKAGES.as_slice(),
        X11_PACKAGES.as_slice(),
        GRAPHICS_PACKAGES.as_slice(),
        MISC_PACKAGES.as_slice(),
    ] {
        for pkg in group {
            if !packages.contains(pkg) {
                packages.push(*pkg);
            }
        }
    }
    packages
}

/// The full recipe, in execution order.
pub(crate) fn steps() -> Vec<Step> {
    let critical = CRITICAL_PACKAGES.join(" ");
    let bulk = bulk_packages().join(" ");

    vec![
        Step {
            label: "clean package cache",
            attempts: vec![Command::shell("sudo dnf clean all")],
            policy: FailurePolicy::Continue,
        },
        Step {
            label: "install critical packages",
            attempts: vec![
                Command::shell(&format!("sudo dnf install -y {critical}")),
                // Second attempt permits package replacement/erasure to
                // resolve conflicts.
                Command::shell(&format!("sudo dnf install -y --allowerasing {critical}")),
            ],
            policy: FailurePolicy::Continue,
        },
        Step {
            label: "install browser dependencies",
            attempts: vec![Command::shell(&format!(
                "sudo dnf install -y --skip-broken {bulk}"
            ))],
            policy: FailurePolicy::Continue,
        },
        Step {
            label: "refresh shared library cache",
            attempts: vec![Command::shell("sudo ldconfig")],
            policy: FailurePolicy::Continue,
        },
        Step {
            label: "install agent-browser",
            attempts: vec![Command {
                program: "npm".into(),
                args: vec!["install".into(), "-g".into(), BROWSER_CLI_PACKAGE.into()],
            }],
            policy: FailurePolicy::Fatal,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_in_recipe_order() {
        let labels: Vec<&str> = steps().iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            [
                "clean package cache",
                "install critical packages",
                "install browser dependencies",
                "refresh shared library cache",
                "install agent-browser",
            ]
        );
    }

    #[test]
    fn critical_install_has_one_relaxed_retry() {
        let steps = steps();
        let critical = &steps[1];
        assert_eq!(critical.attempts.len(), 2);
        assert_eq!(critical.policy, FailurePolicy::Continue);

        let first = &critical.attempts[0].args[1];
        let second = &critical.attempts[1].args[1];
        assert!(!first.contains("--allowerasing"));
        assert!(second.contains("--allowerasing"));
        for attempt in &critical.attempts {
            let script = &attempt.args[1];
            assert!(script.contains("nss"), "got: {script}");
            assert!(script.contains("nspr"), "got: {script}");
        }
    }

    #[test]
    fn bulk_union_is_deduplicated_and_complete() {
        let bulk = bulk_packages();
        let expected: Vec<&str> = DISPLAY_PACKAGES
            .iter()
            .chain(&X11_PACKAGES)
            .chain(&GRAPHICS_PACKAGES)
            .chain(&MISC_PACKAGES)
            .copied()
            .collect();
        for pkg in &expected {
            assert!(bulk.contains(pkg), "missing {pkg}");
        }
        assert_eq!(bulk.len(), 23, "union should carry no duplicates");
    }

    #[test]
    fn bulk_install_is_a_single_skip_broken_invocation() {
        let steps = steps();
        let bulk = &steps[2];
        assert_eq!(bulk.attempts.len(), 1);
        assert_eq!(bulk.policy, FailurePolicy::Continue);

        let script = &bulk.attempts[0].args[1];
        assert!(script.contains("--skip-broken"), "got: {script}");
        for pkg in bulk_packages() {
            assert!(script.contains(pkg), "missing {pkg} in: {script}");
        }
    }

    #[test]
    fn tool_install_is_the_only_fatal_step() {
        let steps = steps();
        let fatal: Vec<&Step> = steps
            .iter()
            .filter(|s| s.policy == FailurePolicy::Fatal)
            .collect();
        assert_eq!(fatal.len(), 1);
        let tool = fatal[0];
        assert_eq!(tool.attempts.len(), 1);
        assert_eq!(tool.attempts[0].program, "npm");
        assert_eq!(tool.attempts[0].args, ["install", "-g", "agent-browser"]);
    }

    #[test]
    fn shell_steps_fold_stderr_into_stdout() {
        for step in steps() {
            for attempt in &step.attempts {
                if attempt.program == "sh" {
                    assert_eq!(attempt.args[0], "-c");
                    assert!(attempt.args[1].ends_with("2>&1"), "got: {:?}", attempt.args);
                }
            }
        }
    }
}
