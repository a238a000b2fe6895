use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const PROMPT: Color = Color::Yellow;
pub const HOSTNAME: Color = Color::Green;
pub const ADDRESS: Color = Color::BrightBlue;
pub const ERROR: Color = Color::Red;
