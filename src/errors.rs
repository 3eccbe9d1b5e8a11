use std::path::PathBuf;

use crate::types::ExitStatus;

#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    #[error("Error running command: '{command}' ({status})")]
    CommandFailed { command: String, status: ExitStatus },

    #[error("Failed to start command '{command}': {source}")]
    CommandSpawn {
        command: String,
        source: std::io::Error,
    },

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {detail}")]
    ConfigParse { path: PathBuf, detail: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },
}
