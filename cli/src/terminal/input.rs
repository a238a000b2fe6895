use std::io::{self, BufRead, Write};

use colored::*;

use crate::terminal::colors;

/// Shows `prompt` and reads one line from `input`.
///
/// `None` means the input is exhausted.
pub fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<Option<String>> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", prompt.color(colors::PROMPT))?;
    stdout.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(stdout)?;
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Reads one line from stdin; end of input is an error.
pub fn prompt_line(prompt: &str) -> io::Result<String> {
    read_line(&mut io::stdin().lock(), prompt)?
        .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))
}
