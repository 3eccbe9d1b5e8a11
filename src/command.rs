use std::process::Command;

use tracing::debug;

use crate::errors::BenchError;
use crate::types::{CommandLine, ExitStatus};

/// Runs an external command to completion and reports how it exited.
pub trait CommandRunner {
    fn run(&mut self, command: &CommandLine) -> Result<ExitStatus, BenchError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &mut R {
    fn run(&mut self, command: &CommandLine) -> Result<ExitStatus, BenchError> {
        (**self).run(command)
    }
}

/// Spawns real processes. The child inherits stdin, stdout and stderr, so
/// `yes | verbench` answers the package manager's prompts.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &CommandLine) -> Result<ExitStatus, BenchError> {
        debug!(%command, "spawning");
        let status = Command::new(command.program())
            .args(command.arguments())
            .status()
            .map_err(|source| BenchError::CommandSpawn {
                command: command.to_string(),
                source,
            })?;
        Ok(status.into())
    }
}

/// Runs `command` and fails with `CommandFailed` unless it exits 0.
pub fn execute<R: CommandRunner + ?Sized>(
    runner: &mut R,
    command: &CommandLine,
) -> Result<(), BenchError> {
    let status = runner.run(command)?;
    if !status.success() {
        return Err(BenchError::CommandFailed {
            command: command.to_string(),
            status,
        });
    }
    Ok(())
}
