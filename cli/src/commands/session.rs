//! The interactive loop: site prompt, scan, selection menu, launch.

use std::io::BufRead;
use std::time::Instant;

use sitelink_common::config::Config;
use sitelink_common::site::{HostCandidate, SiteIdentifier};
use sitelink_core::launcher::SessionLauncher;
use sitelink_core::menu::{self, MenuAction, SelectionMenu, SiteCommand};
use sitelink_core::resolver;
use sitelink_core::scanner::SiteScanner;
use tracing::{Instrument, error};

use crate::mprint;
use crate::terminal::{input, print, spinner};

const SITE_PROMPT: &str = "\nEnter the Site no. / UKSLO / UKRED (or 'q' to quit) (case-insensitive): ";
const SELECT_PROMPT: &str = "\nEnter the option number (like 1,2,3..) to connect to a device, 'm' to go back to MAIN MENU, or 'q' to QUIT: ";
const PAUSE_PROMPT: &str = "\nPress Enter to continue...";

/// Whether the top-level loop keeps going.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<R> {
    cfg: Config,
    scanner: SiteScanner,
    launcher: Box<dyn SessionLauncher>,
    username: String,
    input: R,
}

impl<R: BufRead> Session<R> {
    pub fn new(
        cfg: Config,
        scanner: SiteScanner,
        launcher: Box<dyn SessionLauncher>,
        username: String,
        input: R,
    ) -> Self {
        Self {
            cfg,
            scanner,
            launcher,
            username,
            input,
        }
    }

    /// Runs until the operator quits or input ends.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            if !self.cfg.no_banner {
                print::clear_screen();
                print::banner();
            }

            let Some(site) = self.prompt_site()? else {
                break;
            };

            if self.visit_site(&site).await? == Flow::Quit {
                break;
            }
        }

        print::print_status("Exiting program.");
        Ok(())
    }

    /// `None` when the operator quits.
    fn prompt_site(&mut self) -> anyhow::Result<Option<SiteIdentifier>> {
        loop {
            let Some(line) = input::read_line(&mut self.input, SITE_PROMPT)? else {
                return Ok(None);
            };
            match menu::parse_site_command(&line) {
                Ok(SiteCommand::Scan(site)) => return Ok(Some(site)),
                Ok(SiteCommand::Quit) => return Ok(None),
                Err(e) => print::error_line(e),
            }
        }
    }

    /// Resolves and scans one site, then hands over to the selection menu.
    pub async fn visit_site(&mut self, site: &SiteIdentifier) -> anyhow::Result<Flow> {
        let candidates = resolver::resolve(site);
        let (span, on_progress) = spinner::scan_span(site.as_str(), candidates.len());

        let start_time = Instant::now();
        let results = self
            .scanner
            .scan_site(&candidates, Some(on_progress))
            .instrument(span)
            .await;

        let selection = SelectionMenu::from_results(&results);
        print::scan_summary(selection.len(), results.len(), start_time.elapsed());

        if selection.is_empty() {
            print::site_unavailable(site);
            return match input::read_line(&mut self.input, PAUSE_PROMPT)? {
                Some(_) => Ok(Flow::Continue),
                None => Ok(Flow::Quit),
            };
        }

        print::site_available(site);
        print::host_menu(&selection);
        self.select(&selection).await
    }

    async fn select(&mut self, selection: &SelectionMenu) -> anyhow::Result<Flow> {
        loop {
            let Some(line) = input::read_line(&mut self.input, SELECT_PROMPT)? else {
                return Ok(Flow::Quit);
            };

            match selection.parse(&line) {
                Ok(MenuAction::Skip) => {
                    print::print_status("Skipping connection.");
                    return Ok(Flow::Continue);
                }
                Ok(MenuAction::Connect(number)) => {
                    if let Some(host) = selection.get(number) {
                        self.connect(host).await;
                    }
                }
                Ok(MenuAction::MainMenu) => {
                    print::print_status("Returning to the main menu.");
                    return Ok(Flow::Continue);
                }
                Ok(MenuAction::Quit) => return Ok(Flow::Quit),
                Err(e) => print::error_line(e),
            }
        }
    }

    async fn connect(&self, host: &HostCandidate) {
        let target = host.target();
        match self.launcher.launch(&target, &self.username).await {
            Ok(()) => {
                mprint!();
                print::print_status(format!("Opened session to {}@{target}", self.username));
            }
            Err(e) => {
                error!("Launch failed for {}: {e}", host.name);
                print::error_line(e);
            }
        }
    }
}
