//! Terminal rendering of inventory markdown.
//!
//! The core formats everything as markdown. Item titles, listing entries and
//! expired warranties get their own colors here; all other lines go through
//! termimad's inline styling. Plain mode prints the markdown untouched.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const TITLE: &str = "\x1b[1;34m";
const ENTRY: &str = "\x1b[36m";
const EXPIRED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Role of one output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    /// `# 7. Drawer Unit`, `# Store ready`
    Title,
    /// `## Drawer Unit (ID: 7)` in listings, `## Notes` in details
    Entry,
    /// `- Warranty until: 2024-01-31 (expired)`
    Expired,
    Body,
}

impl LineKind {
    fn of(line: &str) -> Self {
        if line.starts_with("## ") {
            Self::Entry
        } else if line.starts_with("# ") {
            Self::Title
        } else if line.starts_with("- Warranty until:") && line.ends_with("(expired)") {
            Self::Expired
        } else {
            Self::Body
        }
    }

    fn color(self) -> Option<&'static str> {
        match self {
            Self::Title => Some(TITLE),
            Self::Entry => Some(ENTRY),
            Self::Expired => Some(EXPIRED),
            Self::Body => None,
        }
    }
}

/// Prints inventory markdown, colored or plain
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match LineKind::of(line).color() {
                Some(color) => println!("{color}{line}{RESET}"),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_lines_are_classified() {
        assert_eq!(LineKind::of("# 7. Drawer Unit"), LineKind::Title);
        assert_eq!(LineKind::of("## Drawer Unit (ID: 7)"), LineKind::Entry);
        assert_eq!(LineKind::of("## Notes"), LineKind::Entry);
        assert_eq!(
            LineKind::of("- Warranty until: 2024-01-31 (expired)"),
            LineKind::Expired
        );
        assert_eq!(LineKind::of("- Warranty until: 2999-01-31"), LineKind::Body);
        assert_eq!(LineKind::of("- Qty: 2 • Garage • Tools"), LineKind::Body);
        assert_eq!(LineKind::of("#hashtag"), LineKind::Body);
    }

    #[test]
    fn test_body_lines_have_no_color() {
        assert_eq!(LineKind::Body.color(), None);
        assert_eq!(LineKind::Title.color(), Some(TITLE));
    }

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("# 1. Lamp\n").is_ok());
    }
}
