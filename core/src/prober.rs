//! Single-shot liveness checks.
//!
//! A probe is one ICMP echo request sent through the system `ping` binary, so
//! no raw-socket privileges are needed. Every outcome collapses to a `bool`:
//! timeouts, unreachable hosts and unresolvable names are simply `false`.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::ProbeError;

const PING_BINARY: &str = "ping";

/// Extra time given to the `ping` process on top of its own wait before it is killed.
const WATCHDOG_GRACE: Duration = Duration::from_secs(2);

/// Answers whether a host responds.
#[async_trait]
pub trait Prober: Send + Sync {
    /// `target` is a hostname or a literal IP address.
    ///
    /// Must not fail: any problem is reported as `false`.
    async fn probe(&self, target: &str) -> bool;
}

/// Probes by running the platform `ping` with a single packet.
#[derive(Clone, Debug)]
pub struct PingProber {
    timeout: Duration,
    binary: PathBuf,
}

impl PingProber {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            binary: PathBuf::from(PING_BINARY),
        }
    }

    /// Runs `binary` instead of the `ping` found on `PATH`.
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    async fn ping(&self, target: &str) -> Result<bool, ProbeError> {
        let mut child = Command::new(&self.binary)
            .args(ping_args(target, self.timeout))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ProbeError::Unavailable,
                _ => ProbeError::Io {
                    target: target.to_string(),
                    source: e,
                },
            })?;

        match tokio::time::timeout(self.timeout + WATCHDOG_GRACE, child.wait()).await {
            Ok(status) => {
                let status = status.map_err(|e| ProbeError::Io {
                    target: target.to_string(),
                    source: e,
                })?;
                Ok(status.success())
            }
            Err(_elapsed) => {
                debug!("ping to {target} overran its deadline, killing it");
                Ok(false)
            }
        }
    }
}

impl Default for PingProber {
    fn default() -> Self {
        Self::new(sitelink_common::config::DEFAULT_PROBE_TIMEOUT)
    }
}

#[async_trait]
impl Prober for PingProber {
    async fn probe(&self, target: &str) -> bool {
        match self.ping(target).await {
            Ok(alive) => {
                debug!("{target} {}", if alive { "answered" } else { "did not answer" });
                alive
            }
            Err(e @ ProbeError::Unavailable) => {
                warn!("{e}");
                false
            }
            Err(e) => {
                debug!("{e}");
                false
            }
        }
    }
}

/// One packet, bounded wait.
#[cfg(windows)]
fn ping_args(target: &str, timeout: Duration) -> Vec<String> {
    vec![
        "-n".into(),
        "1".into(),
        "-w".into(),
        timeout.as_millis().max(1).to_string(),
        target.into(),
    ]
}

/// One packet, bounded wait. macOS takes `-W` in milliseconds.
#[cfg(target_os = "macos")]
fn ping_args(target: &str, timeout: Duration) -> Vec<String> {
    vec![
        "-c".into(),
        "1".into(),
        "-W".into(),
        timeout.as_millis().max(1).to_string(),
        target.into(),
    ]
}

/// One packet, bounded wait. `-W` is whole seconds here.
#[cfg(not(any(windows, target_os = "macos")))]
fn ping_args(target: &str, timeout: Duration) -> Vec<String> {
    vec![
        "-c".into(),
        "1".into(),
        "-W".into(),
        timeout.as_secs().max(1).to_string(),
        target.into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sends_exactly_one_packet_to_target() {
        let args = ping_args("ra.s0123.asda.uk", Duration::from_secs(1));
        assert_eq!(args.len(), 5);
        assert_eq!(args[1], "1");
        assert_eq!(args.last().map(String::as_str), Some("ra.s0123.asda.uk"));
    }

    #[cfg(not(any(windows, target_os = "macos")))]
    #[test]
    fn sub_second_timeout_rounds_up_to_one_second() {
        let args = ping_args("10.0.8.146", Duration::from_millis(200));
        assert_eq!(args, vec!["-c", "1", "-W", "1", "10.0.8.146"]);
    }

    #[cfg(windows)]
    #[test]
    fn windows_wait_is_in_milliseconds() {
        let args = ping_args("10.0.8.146", Duration::from_secs(1));
        assert_eq!(args, vec!["-n", "1", "-w", "1000", "10.0.8.146"]);
    }

    #[tokio::test]
    async fn missing_ping_binary_is_unavailable_and_unreachable() {
        let prober = PingProber::default().with_binary("/nonexistent/sitelink-ping");

        assert!(matches!(
            prober.ping("127.0.0.1").await,
            Err(ProbeError::Unavailable)
        ));
        assert!(!prober.probe("127.0.0.1").await);
    }

    #[tokio::test]
    #[ignore]
    async fn loopback_answers() {
        assert!(PingProber::default().probe("127.0.0.1").await);
    }

    #[tokio::test]
    #[ignore]
    async fn unresolvable_name_is_unreachable() {
        assert!(!PingProber::default().probe("no-such-host.invalid").await);
    }
}
