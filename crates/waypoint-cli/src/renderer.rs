//! Terminal rendering for markdown output.
//!
//! Rich mode styles headings, quotes and inline markup with termimad; plain
//! mode prints the markdown unchanged.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.quote_mark.set_fg(Color::Green);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Prints markdown to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        self.write_markdown(&mut out, markdown)?;
        out.flush()?;
        Ok(())
    }

    fn write_markdown(&self, out: &mut impl Write, markdown: &str) -> io::Result<()> {
        if !self.rich_enabled {
            return write!(out, "{markdown}");
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                // Keep the hashes so heading depth stays visible.
                writeln!(out, "\x1b[36m{line}\x1b[0m")?;
            } else if let Some(quote) = line.strip_prefix("> ") {
                writeln!(out, "\x1b[32m│\x1b[0m \x1b[3m{quote}\x1b[0m")?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_plain_output_is_unchanged() {
        let mut out = Vec::new();
        TerminalRenderer::new(false)
            .write_markdown(&mut out, "# Plan\n\n> Keep going\n")
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "# Plan\n\n> Keep going\n");
    }

    #[test]
    fn test_rich_output_keeps_heading_hashes() {
        let mut out = Vec::new();
        TerminalRenderer::new(true)
            .write_markdown(&mut out, "### 1. Outline\n> Keep going")
            .unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("\x1b[36m### 1. Outline\x1b[0m\n"));
        assert!(output.contains("│"));
        assert!(output.contains("Keep going"));
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }
}
