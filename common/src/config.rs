use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

/// Per-probe wait ceiling. One echo request, about a second.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Upper bound on probes in flight while scanning a templated site.
pub const DEFAULT_MAX_CONCURRENT_PROBES: usize = 30;

/// Keyring service under which the SSH username is stored.
pub const DEFAULT_CREDENTIAL_SERVICE: &str = "asda_ssh";

const SSH_CLIENT_ENV: &str = "SITELINK_SSH_CLIENT";
const NO_BANNER_ENV: &str = "SITELINK_NO_BANNER";

#[derive(Clone, Debug)]
pub struct Config {
    /// Skips the banner that is drawn before every site prompt.
    pub no_banner: bool,
    pub probe_timeout: Duration,
    /// Concurrency cap for templated sites.
    ///
    /// Fixed-table sites are always probed one at a time.
    pub max_concurrent_probes: usize,
    /// Overrides the platform default SSH client binary.
    pub ssh_client: Option<PathBuf>,
    pub credential_service: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            max_concurrent_probes: DEFAULT_MAX_CONCURRENT_PROBES,
            ssh_client: None,
            credential_service: DEFAULT_CREDENTIAL_SERVICE.to_string(),
        }
    }
}

impl Config {
    /// Defaults, overridden by `SITELINK_SSH_CLIENT` and `SITELINK_NO_BANNER`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(path) = lookup(SSH_CLIENT_ENV).filter(|v| !v.trim().is_empty()) {
            debug!("SSH client overridden by {SSH_CLIENT_ENV}: {path}");
            cfg.ssh_client = Some(PathBuf::from(path.trim()));
        }

        if let Some(flag) = lookup(NO_BANNER_ENV) {
            cfg.no_banner = is_truthy(&flag);
        }

        cfg
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
