//! Spawns the Chroma server and waits for it to exit.

use std::io::ErrorKind;
use std::process::{Command, Stdio};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{LaunchError, Result};
use crate::invocation::Invocation;

#[derive(Debug, Clone)]
pub struct Launcher {
    executable: String,
}

/// A fully resolved command, as printed by `--dry-run --json`.
#[derive(Debug, Serialize)]
pub struct LaunchPlan<'a> {
    pub executable: &'a str,
    pub args: Vec<String>,
    pub host: &'a str,
    pub port: i64,
    pub path: &'a str,
}

impl Launcher {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Builds the server command with all standard streams inherited.
    pub fn command(&self, invocation: &Invocation) -> Command {
        let mut command = Command::new(&self.executable);
        command
            .args(invocation.server_args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }

    pub fn plan<'a>(&'a self, invocation: &'a Invocation) -> LaunchPlan<'a> {
        LaunchPlan {
            executable: &self.executable,
            args: invocation.server_args(),
            host: invocation.host(),
            port: invocation.port(),
            path: invocation.path(),
        }
    }

    /// Shell-style rendering of the command, for logs and diagnostics.
    pub fn command_line(&self, invocation: &Invocation) -> String {
        std::iter::once(self.executable.clone())
            .chain(invocation.server_args())
            .map(|arg| shell_quote(&arg))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Runs the server in the foreground. Blocks until it terminates.
    pub fn run(&self, invocation: &Invocation) -> Result<()> {
        let command_line = self.command_line(invocation);
        debug!(command = %command_line, "starting server");

        let status = self
            .command(invocation)
            .status()
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => LaunchError::ExecutableNotFound(self.executable.clone()),
                _ => LaunchError::Spawn {
                    executable: self.executable.clone(),
                    source,
                },
            })?;

        if status.success() {
            info!(command = %command_line, "server exited cleanly");
            Ok(())
        } else {
            warn!(command = %command_line, %status, "server exited with failure");
            Err(LaunchError::ServerFailed {
                command: command_line,
                status,
            })
        }
    }
}

fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@,+".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
