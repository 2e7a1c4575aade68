//! Shell collaborators
//!
//! Tool version probes and SBOM command execution. Everything here goes
//! through the platform shell (`cmd.exe /c` on Windows, `sh -c` elsewhere) so
//! PATH lookup and wrapper scripts like `gradlew.bat` resolve the way they do
//! for a developer at a terminal.

use crate::build_systems::BuildSystemId;
use crate::commands::PlannedCommand;
use serde::Serialize;
use std::process::Command;
use tracing::{debug, info, warn};

/// Outcome of probing a build tool's version command.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ToolVersion {
    pub detected: bool,
    pub version_info: String,
}

/// Outcome of one SBOM command execution.
#[derive(Debug, Clone)]
pub struct ExecOutcome {
    pub success: bool,
    pub exit_code: Option<i32>,
    /// Human-oriented failure summary, empty on success.
    pub message: String,
}

fn shell() -> (&'static str, &'static str) {
    if cfg!(windows) {
        ("cmd.exe", "/c")
    } else {
        ("sh", "-c")
    }
}

/// Run a build tool's version command and capture whatever it prints.
///
/// stdout and stderr are combined since tools disagree about which stream
/// version banners belong on. Detected means exit 0 with non-empty output;
/// anything else, including a spawn failure, reports the tool as absent
/// rather than erroring out.
pub fn probe_tool_version(version_command: &str) -> ToolVersion {
    let (sh, flag) = shell();
    debug!(command = version_command, "probing tool version");
    match Command::new(sh).arg(flag).arg(version_command).output() {
        Ok(output) => {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            let combined = combined.trim().to_string();
            if output.status.success() && !combined.is_empty() {
                ToolVersion {
                    detected: true,
                    version_info: combined,
                }
            } else {
                ToolVersion {
                    detected: false,
                    version_info: "Not installed or inaccessible".to_string(),
                }
            }
        }
        Err(e) => ToolVersion {
            detected: false,
            version_info: format!("Not installed or inaccessible: {e}"),
        },
    }
}

/// Execute a planned SBOM command in its working directory.
///
/// Execution failures are data, not errors: a missing tool or non-zero exit
/// becomes an [`ExecOutcome`] the caller reports alongside the other
/// instances instead of aborting the run.
pub fn run_planned(planned: &PlannedCommand) -> ExecOutcome {
    let (sh, flag) = shell();
    info!(
        command = %planned.command,
        working_dir = %planned.working_dir.display(),
        "executing SBOM command"
    );
    match Command::new(sh)
        .arg(flag)
        .arg(&planned.command)
        .current_dir(&planned.working_dir)
        .output()
    {
        Ok(output) => {
            let code = output.status.code();
            if output.status.success() {
                ExecOutcome {
                    success: true,
                    exit_code: code,
                    message: String::new(),
                }
            } else {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let message = map_error_message(planned.build_system, &stderr, code);
                warn!(exit_code = ?code, %message, "SBOM command failed");
                ExecOutcome {
                    success: false,
                    exit_code: code,
                    message,
                }
            }
        }
        Err(e) => ExecOutcome {
            success: false,
            exit_code: None,
            message: format!("failed to execute command: {e}"),
        },
    }
}

/// Translate well-known tool failures into actionable messages.
fn map_error_message(system: BuildSystemId, stderr: &str, exit_code: Option<i32>) -> String {
    match system {
        BuildSystemId::Npm => {
            if stderr.contains("Did you forget to run `npm install`") {
                return "Missing node_modules - run 'npm install' first".to_string();
            }
            if stderr.contains("No evidence: no package lock file") {
                return "Missing package-lock.json - run 'npm install' to generate it".to_string();
            }
        }
        BuildSystemId::DotNet => {
            if stderr.contains("contains more than one project file") {
                return "Multiple project files found - specify which project to analyze"
                    .to_string();
            }
        }
        _ => {}
    }
    match exit_code {
        Some(code) => format!("{} SBOM generation failed with exit code: {code}", system.name()),
        None => format!("{} SBOM generation terminated by signal", system.name()),
    }
}
