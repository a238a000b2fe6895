use std::fmt::Display;
use std::io;
use std::time::Duration;

use colored::*;
use crossterm::{cursor::MoveTo, execute, terminal::{Clear, ClearType}};
use sitelink_common::site::{HostCandidate, SiteIdentifier};
use sitelink_core::menu::SelectionMenu;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;
use crate::terminal::logging::PRINT_TARGET;

pub const TOTAL_WIDTH: usize = 70;

const ENVIRONMENT: &str = "Designed for: ASDA NewCo Environment";

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn clear_screen() {
    // Cosmetic only; a terminal that refuses the escape codes just scrolls.
    let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
}

pub fn banner() {
    let text_content: String = format!("⟦ SITELINK v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.color(colors::PRIMARY).bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();

    print(&format!("{}{}{}", sep, text, sep));
    centerln(&format!("{}", ENVIRONMENT.green()));

    let timestamp = chrono::Local::now().format("%d-%m-%Y %H:%M:%S");
    centerln(&format!("{}", format!("Session started: {timestamp}").magenta()));
    fat_separator();
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::ACCENT));
    print(&message);
}

pub fn error_line<E: Display>(err: E) {
    let prefix: ColoredString = "[ERROR]".color(colors::ERROR).bold();
    print(&format!("{} {}", prefix, err.to_string().color(colors::ERROR)));
}

pub fn site_available(site: &SiteIdentifier) {
    mprint!();
    print(&format!(
        "{}",
        format!("✔ Site: {site} is available in the NewCo environment!").yellow()
    ));
    mprint!();
    header("reachable network devices");
}

pub fn site_unavailable(site: &SiteIdentifier) {
    mprint!();
    print(&format!(
        "{}",
        format!("✘ Site: {site} is not available in the NewCo environment!").red()
    ));
    mprint!();
    print_status("Please try a different site no..");
}

pub fn host_line(number: usize, host: &HostCandidate) {
    let mut output: String = format!(
        "{}{} {}",
        number.to_string().color(colors::ACCENT),
        ".".color(colors::SEPARATOR),
        host.name.color(colors::HOSTNAME)
    );
    if let Some(ip) = host.address {
        output.push_str(&format!(" {}", format!("({ip})").color(colors::ADDRESS)));
    }
    print(&output);
}

pub fn host_menu(menu: &SelectionMenu) {
    for (number, host) in menu.entries() {
        host_line(number, host);
    }
}

pub fn scan_summary(reachable: usize, total: usize, elapsed: Duration) {
    let hosts: ColoredString = format!("{reachable}/{total} devices").bold().green();
    let time: ColoredString = format!("{:.2}s", elapsed.as_secs_f64()).bold().yellow();
    let output: String = format!(
        "{}",
        format!("Scan complete: {hosts} reachable in {time}").color(colors::TEXT_DEFAULT)
    );
    fat_separator();
    centerln(&output);
}
