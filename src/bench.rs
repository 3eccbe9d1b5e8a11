use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::command::{CommandRunner, execute};
use crate::config::Settings;
use crate::errors::BenchError;
use crate::installer::PackageInstaller;
use crate::types::{Report, VersionTiming};

/// Benchmarks the configured versions one after another.
///
/// Each version goes through uninstall, install, one untimed warm-up call of
/// the entry point, then `trials` timed calls. The first failing command
/// aborts the whole run; no partial report is produced.
pub struct Bench<I, R, C> {
    settings: Settings,
    installer: I,
    runner: R,
    clock: C,
}

impl<I, R, C> Bench<I, R, C>
where
    I: PackageInstaller,
    R: CommandRunner,
    C: Clock,
{
    pub fn new(settings: Settings, installer: I, runner: R, clock: C) -> Self {
        Bench {
            settings,
            installer,
            runner,
            clock,
        }
    }

    /// Reinstalls `version` and times the entry point.
    pub fn bench_version(&mut self, version: &str) -> Result<VersionTiming, BenchError> {
        self.uninstall()?;
        self.installer
            .install_version(&self.settings.package, version)?;

        info!(version, "warming up");
        execute(&mut self.runner, &self.settings.entry_point)?;

        let mut samples = Vec::new();
        for trial in 0..self.settings.trials {
            let start = self.clock.now();
            execute(&mut self.runner, &self.settings.entry_point)?;
            let elapsed = self.clock.now().saturating_sub(start).as_secs_f64();
            debug!(version, trial, elapsed, "trial finished");
            samples.push(elapsed);
        }

        let timing = VersionTiming::from_samples(samples);
        info!(version, mean = timing.mean, "version finished");
        Ok(timing)
    }

    /// Benchmarks every version in declared order and returns the results table.
    pub fn bench(&mut self) -> Result<Report, BenchError> {
        info!(
            package = %self.settings.package,
            versions = self.settings.versions.len(),
            trials = self.settings.trials,
            "starting benchmark"
        );

        let mut results = BTreeMap::new();
        for version in self.settings.versions.clone() {
            let timing = self.bench_version(&version)?;
            results.insert(version, timing);
        }

        Ok(Report {
            package: self.settings.package.clone(),
            trials: self.settings.trials,
            results,
        })
    }

    fn uninstall(&mut self) -> Result<(), BenchError> {
        match self.installer.uninstall(&self.settings.package) {
            Err(BenchError::CommandFailed { command, status })
                if self.settings.tolerate_missing_uninstall =>
            {
                warn!(%command, %status, "uninstall failed, continuing with install");
                Ok(())
            }
            other => other,
        }
    }
}
