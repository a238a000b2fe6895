use std::path::PathBuf;

use thiserror::Error;

/// Reasons a probe could not produce an answer.
///
/// These never leave the prober; they are logged and folded into `false`.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("ping command not found, ensure ping is installed")]
    Unavailable,
    #[error("error pinging {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("SSH client not found at {}", .0.display())]
    ClientMissing(PathBuf),
    #[error("failed to launch {client}: {source}")]
    Spawn {
        client: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("credential store unavailable: {0}")]
    Store(String),
    #[error("no username provided")]
    Empty,
    #[error("failed to read username: {0}")]
    Prompt(#[from] std::io::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("please enter a valid site no.")]
    EmptySite,
    #[error("invalid option, enter a number between 1 and {max}, 'm' for main menu, or 'q' to quit")]
    InvalidSelection { max: usize },
}
