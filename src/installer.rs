use tracing::info;

use crate::command::{CommandRunner, execute};
use crate::errors::BenchError;
use crate::types::CommandLine;

/// Owner of the host's single installed copy of the benchmarked package.
pub trait PackageInstaller {
    fn uninstall(&mut self, package: &str) -> Result<(), BenchError>;

    fn install_version(&mut self, package: &str, version: &str) -> Result<(), BenchError>;
}

impl<I: PackageInstaller + ?Sized> PackageInstaller for &mut I {
    fn uninstall(&mut self, package: &str) -> Result<(), BenchError> {
        (**self).uninstall(package)
    }

    fn install_version(&mut self, package: &str, version: &str) -> Result<(), BenchError> {
        (**self).install_version(package, version)
    }
}

/// Drives a package manager CLI that understands `uninstall <name>` and
/// `install <name> -v <version>` (RubyGems' `gem`, by default behind `sudo`).
#[derive(Debug, Clone)]
pub struct CliInstaller<R> {
    manager: CommandLine,
    runner: R,
}

impl<R: CommandRunner> CliInstaller<R> {
    pub fn new(manager: CommandLine, runner: R) -> Self {
        CliInstaller { manager, runner }
    }

    pub fn uninstall_command(&self, package: &str) -> CommandLine {
        self.manager.clone().arg("uninstall").arg(package)
    }

    pub fn install_command(&self, package: &str, version: &str) -> CommandLine {
        self.manager
            .clone()
            .args(&["install", package, "-v", version])
    }
}

impl<R: CommandRunner> PackageInstaller for CliInstaller<R> {
    fn uninstall(&mut self, package: &str) -> Result<(), BenchError> {
        let command = self.uninstall_command(package);
        info!(%command, "uninstalling");
        execute(&mut self.runner, &command)
    }

    fn install_version(&mut self, package: &str, version: &str) -> Result<(), BenchError> {
        let command = self.install_command(package, version);
        info!(%command, "installing");
        execute(&mut self.runner, &command)
    }
}
