mod commands;
mod terminal;

use std::sync::Arc;

use commands::CommandLine;
use commands::session::Session;
use sitelink_common::config::Config;
use sitelink_core::credentials::{self, KeyringStore, USERNAME_ENV, UsernameSource};
use sitelink_core::launcher::SshClientLauncher;
use sitelink_core::prober::PingProber;
use sitelink_core::scanner::SiteScanner;
use terminal::{input, logging, print};
use tracing::debug;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _commands = CommandLine::parse_args();

    logging::init_logging()?;
    let cfg = Config::from_env();

    let (username, source) = credentials::resolve_username(
        &cfg.credential_service,
        std::env::var(USERNAME_ENV).ok(),
        &KeyringStore,
        || input::prompt_line("Enter SSH username: "),
    )?;
    if source == UsernameSource::Prompt {
        print::print_status(format!("Using SSH username '{username}'."));
    }
    debug!("SSH username resolved from {source:?}");

    let scanner = SiteScanner::new(
        Arc::new(PingProber::new(cfg.probe_timeout)),
        cfg.max_concurrent_probes,
    );
    let launcher = SshClientLauncher::from_config(&cfg);

    let stdin = std::io::stdin().lock();
    Session::new(cfg, scanner, Box::new(launcher), username, stdin)
        .run()
        .await
}
