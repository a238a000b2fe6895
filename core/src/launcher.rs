//! Hands a selected device over to an external SSH client.
//!
//! PuTTY opens its own window, so it is spawned and left running. A terminal
//! client such as OpenSSH takes over the current terminal and the menu resumes
//! once the session ends.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use sitelink_common::config::Config;
use tokio::process::Command;
use tracing::debug;

use crate::error::LaunchError;

#[cfg(windows)]
const DEFAULT_CLIENT: &str = r"C:\Program Files\PuTTY\putty.exe";
#[cfg(not(windows))]
const DEFAULT_CLIENT: &str = "ssh";

#[async_trait]
pub trait SessionLauncher: Send + Sync {
    /// Opens a session to `username@target`.
    async fn launch(&self, target: &str, username: &str) -> Result<(), LaunchError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientKind {
    /// Windowed client, spawned detached.
    Putty,
    /// Terminal client, run in the foreground.
    OpenSsh,
}

impl ClientKind {
    fn detect(program: &Path) -> Self {
        let stem = program
            .file_stem()
            .map(|s| s.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        if stem.contains("putty") {
            ClientKind::Putty
        } else {
            ClientKind::OpenSsh
        }
    }
}

#[derive(Clone, Debug)]
pub struct SshClientLauncher {
    program: PathBuf,
    kind: ClientKind,
}

impl SshClientLauncher {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        let program = program.into();
        let kind = ClientKind::detect(&program);
        Self { program, kind }
    }

    /// The configured client, or the platform default.
    pub fn from_config(cfg: &Config) -> Self {
        match &cfg.ssh_client {
            Some(path) => Self::new(path.clone()),
            None => Self::new(DEFAULT_CLIENT),
        }
    }

    pub fn kind(&self) -> ClientKind {
        self.kind
    }

    fn args(&self, target: &str, username: &str) -> Vec<String> {
        let destination = format!("{username}@{target}");
        match self.kind {
            ClientKind::Putty => vec!["-ssh".to_string(), destination],
            ClientKind::OpenSsh => vec![destination],
        }
    }

    fn client_name(&self) -> String {
        self.program.display().to_string()
    }

    /// A client given as a path must exist; bare names are left to `PATH` lookup.
    fn ensure_present(&self) -> Result<(), LaunchError> {
        let is_path = self.program.components().count() > 1 || self.program.is_absolute();
        if is_path && !self.program.exists() {
            return Err(LaunchError::ClientMissing(self.program.clone()));
        }
        Ok(())
    }

    fn spawn_error(&self, source: std::io::Error) -> LaunchError {
        match source.kind() {
            std::io::ErrorKind::NotFound => LaunchError::ClientMissing(self.program.clone()),
            _ => LaunchError::Spawn {
                client: self.client_name(),
                source,
            },
        }
    }
}

#[async_trait]
impl SessionLauncher for SshClientLauncher {
    async fn launch(&self, target: &str, username: &str) -> Result<(), LaunchError> {
        self.ensure_present()?;

        let mut cmd = Command::new(&self.program);
        cmd.args(self.args(target, username));
        debug!("Launching {} for {username}@{target}", self.client_name());

        match self.kind {
            ClientKind::Putty => {
                cmd.stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null());
                cmd.spawn().map_err(|e| self.spawn_error(e))?;
            }
            ClientKind::OpenSsh => {
                let status = cmd.status().await.map_err(|e| self.spawn_error(e))?;
                debug!("{} exited with {status}", self.client_name());
            }
        }
        Ok(())
    }
}
