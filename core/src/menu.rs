//! The numbered list of reachable hosts and the commands accepted around it.

use sitelink_common::site::{HostCandidate, ReachabilityResult, SiteIdentifier};

use crate::error::InputError;

/// What the operator asked for at the site prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum SiteCommand {
    Scan(SiteIdentifier),
    Quit,
}

/// Parses a line typed at the site prompt. `q` quits, blank input is rejected.
pub fn parse_site_command(input: &str) -> Result<SiteCommand, InputError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") {
        return Ok(SiteCommand::Quit);
    }
    input
        .parse()
        .map(SiteCommand::Scan)
        .map_err(|_| InputError::EmptySite)
}

/// What the operator asked for at the selection prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// Blank line: leave the menu without connecting.
    Skip,
    /// Connect to the host with this 1-based number.
    Connect(usize),
    MainMenu,
    Quit,
}

/// Reachable hosts of one scan, numbered from 1 in candidate order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionMenu {
    hosts: Vec<HostCandidate>,
}

impl SelectionMenu {
    pub fn from_results(results: &[ReachabilityResult]) -> Self {
        let hosts = results
            .iter()
            .filter(|r| r.reachable)
            .map(|r| r.candidate.clone())
            .collect();
        Self { hosts }
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// `(number, host)` pairs, numbering from 1.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &HostCandidate)> {
        self.hosts.iter().enumerate().map(|(idx, host)| (idx + 1, host))
    }

    /// The host shown as `number`, if any.
    pub fn get(&self, number: usize) -> Option<&HostCandidate> {
        number.checked_sub(1).and_then(|idx| self.hosts.get(idx))
    }

    pub fn parse(&self, input: &str) -> Result<MenuAction, InputError> {
        let input = input.trim();
        let invalid = InputError::InvalidSelection { max: self.len() };

        if input.is_empty() {
            return Ok(MenuAction::Skip);
        }
        if input.eq_ignore_ascii_case("m") {
            return Ok(MenuAction::MainMenu);
        }
        if input.eq_ignore_ascii_case("q") {
            return Ok(MenuAction::Quit);
        }
        if !input.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid);
        }

        match input.parse::<usize>() {
            Ok(number) if self.get(number).is_some() => Ok(MenuAction::Connect(number)),
            _ => Err(invalid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, reachable: bool) -> ReachabilityResult {
        ReachabilityResult {
            candidate: HostCandidate::named(name),
            reachable,
        }
    }

    fn menu() -> SelectionMenu {
        SelectionMenu::from_results(&[
            result("ra", false),
            result("rb", true),
            result("supc1", false),
            result("sgrc1", true),
            result("sgrc2", true),
        ])
    }

    #[test]
    fn keeps_only_reachable_hosts_in_order() {
        let menu = menu();
        let numbered: Vec<(usize, &str)> =
            menu.entries().map(|(n, h)| (n, h.name.as_str())).collect();
        assert_eq!(numbered, vec![(1, "rb"), (2, "sgrc1"), (3, "sgrc2")]);
    }

    #[test]
    fn numbers_map_back_to_hosts() {
        let menu = menu();
        assert_eq!(menu.get(0), None);
        assert_eq!(menu.get(1).map(|h| h.name.as_str()), Some("rb"));
        assert_eq!(menu.get(3).map(|h| h.name.as_str()), Some("sgrc2"));
        assert_eq!(menu.get(4), None);
    }

    #[test]
    fn parses_commands() {
        let menu = menu();
        assert_eq!(menu.parse(""), Ok(MenuAction::Skip));
        assert_eq!(menu.parse("  "), Ok(MenuAction::Skip));
        assert_eq!(menu.parse("2"), Ok(MenuAction::Connect(2)));
        assert_eq!(menu.parse(" 3 "), Ok(MenuAction::Connect(3)));
        assert_eq!(menu.parse("M"), Ok(MenuAction::MainMenu));
        assert_eq!(menu.parse("q"), Ok(MenuAction::Quit));
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        let menu = menu();
        let invalid = Err(InputError::InvalidSelection { max: 3 });
        for input in ["0", "4", "-1", "1.5", "x", "mq", "99999999999999999999999"] {
            assert_eq!(menu.parse(input), invalid, "{input}");
        }
    }

    #[test]
    fn empty_menu_accepts_no_numbers() {
        let menu = SelectionMenu::from_results(&[result("ra", false)]);
        assert!(menu.is_empty());
        assert_eq!(menu.parse("1"), Err(InputError::InvalidSelection { max: 0 }));
    }

    #[test]
    fn site_prompt() {
        assert_eq!(parse_site_command("Q"), Ok(SiteCommand::Quit));
        assert_eq!(parse_site_command(""), Err(InputError::EmptySite));
        assert_eq!(
            parse_site_command(" 7001 "),
            Ok(SiteCommand::Scan("7001".parse().unwrap()))
        );
    }
}
