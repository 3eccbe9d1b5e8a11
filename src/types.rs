use std::collections::BTreeMap;
use std::fmt;

use clap::ValueEnum;

/// A program plus its arguments, as handed to a `CommandRunner`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        CommandLine {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Builds a command line from an argv slice. Returns `None` for an empty slice.
    pub fn from_argv<S: AsRef<str>>(argv: &[S]) -> Option<Self> {
        let (program, rest) = argv.split_first()?;
        Some(CommandLine::new(program.as_ref()).args(rest))
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<S: AsRef<str>>(mut self, args: &[S]) -> Self {
        self.args.extend(args.iter().map(|a| a.as_ref().to_string()));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }
}

/// Renders the command the way it would be typed into a POSIX shell.
impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

/// Exit status of a finished child process. `code` is `None` when the
/// process was killed by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus {
    code: Option<i32>,
}

impl ExitStatus {
    pub const SUCCESS: ExitStatus = ExitStatus { code: Some(0) };

    pub fn from_code(code: i32) -> Self {
        ExitStatus { code: Some(code) }
    }

    pub fn signaled() -> Self {
        ExitStatus { code: None }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        ExitStatus {
            code: status.code(),
        }
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {}", code),
            None => f.write_str("terminated by signal"),
        }
    }
}

/// Timing samples for one version, in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionTiming {
    pub mean: f64,
    pub samples: Vec<f64>,
}

impl VersionTiming {
    pub fn from_samples(samples: Vec<f64>) -> Self {
        let mean = if samples.is_empty() {
            0.0
        } else {
            samples.iter().sum::<f64>() / samples.len() as f64
        };
        VersionTiming { mean, samples }
    }
}

/// Results table of one run, keyed by version string.
///
/// `BTreeMap` iteration order is the byte-wise string order used for reporting,
/// so "0.10.0" sorts before "0.9.0".
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub package: String,
    pub trials: usize,
    pub results: BTreeMap<String, VersionTiming>,
}

#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Table,
}

/// Wraps a string in single quotes, escaping internal single quotes as `'\''`.
pub fn shell_escape_single_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push_str("'\\''");
        } else {
            out.push(c);
        }
    }
    out.push('\'');
    out
}

/// Quotes `s` only when a shell would otherwise split or interpret it.
pub fn shell_quote(s: &str) -> String {
    let plain = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,+@%".contains(c));
    if plain {
        s.to_string()
    } else {
        shell_escape_single_quote(s)
    }
}
