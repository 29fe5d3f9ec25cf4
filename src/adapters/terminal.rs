use crate::domain::ports::DisplaySurface;
use crate::utils::error::Result;
use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use std::io::{self, Stdout, Write};

/// Single-line, in-place rendering on a crossterm-capable writer.
///
/// Lines end in `\r\n` so output stays aligned while the key listener has the
/// terminal in raw mode.
pub struct TerminalDisplay<W: Write + Send> {
    out: W,
}

impl TerminalDisplay<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn fit_to_width(text: &str) -> String {
        match terminal::size() {
            Ok((width, _)) => truncate_to(text, width),
            Err(_) => text.to_string(),
        }
    }
}

/// Keeps `text` one column short of `width` so the cursor never wraps.
/// Widths of 0 or 1 leave the text as is.
pub fn truncate_to(text: &str, width: u16) -> String {
    if width <= 1 {
        return text.to_string();
    }
    text.chars().take(width as usize - 1).collect()
}

impl<W: Write + Send> DisplaySurface for TerminalDisplay<W> {
    fn clear_current_line(&mut self) -> Result<()> {
        queue!(self.out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        Ok(())
    }

    fn write_in_place(&mut self, text: &str) -> Result<()> {
        queue!(self.out, MoveToColumn(0), Print(Self::fit_to_width(text)))?;
        self.out.flush()?;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        queue!(self.out, Print(text), Print("\r\n"))?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_line_ends_with_crlf() {
        let mut display = TerminalDisplay::new(Vec::new());
        display.write_line("Life expectancy date reached!").unwrap();

        let output = String::from_utf8(display.into_inner()).unwrap();
        assert!(output.ends_with("Life expectancy date reached!\r\n"));
    }

    #[test]
    fn test_truncate_to_terminal_width() {
        assert_eq!(truncate_to("Time Remaining: 5 days", 11), "Time Remai");
        assert_eq!(truncate_to("short", 80), "short");
        assert_eq!(truncate_to("exactly", 8), "exactly");
        assert_eq!(truncate_to("ünïcode", 4), "ünï");
    }

    #[test]
    fn test_truncate_to_tiny_width_keeps_text() {
        assert_eq!(truncate_to("Time Remaining", 1), "Time Remaining");
        assert_eq!(truncate_to("Time Remaining", 0), "Time Remaining");
    }

    #[test]
    fn test_in_place_write_contains_text() {
        let mut display = TerminalDisplay::new(Vec::new());
        display.clear_current_line().unwrap();
        display.write_in_place("Time Remaining").unwrap();

        let output = String::from_utf8(display.into_inner()).unwrap();
        assert!(output.contains("Time Remaining"));
        assert!(!output.contains('\n'));
    }
}
