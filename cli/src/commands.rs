pub mod session;

use clap::Parser;

/// Takes no operational flags: everything happens at the interactive prompt.
#[derive(Parser)]
#[command(name = "sitelink")]
#[command(version)]
#[command(about = "Find the reachable network devices at a site and open an SSH session to one.")]
#[command(
    long_about = "Find the reachable network devices at a site and open an SSH session to one.\n\n\
    Environment:\n  \
    SSH_USERNAME          username for SSH sessions (otherwise keyring, then prompt)\n  \
    SITELINK_SSH_CLIENT   path to the SSH client (default: PuTTY on Windows, ssh elsewhere)\n  \
    SITELINK_NO_BANNER    set to 1 to skip the banner and screen clearing\n  \
    RUST_LOG              log filter, e.g. debug"
)]
pub struct CommandLine {}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
