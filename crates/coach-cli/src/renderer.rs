//! Terminal output
//!
//! [`TerminalRenderer`] prints the markdown produced by `coach_core::display`
//! either styled through termimad or as plain text. [`StatusNotifier`] shows
//! the notifications raised by views and editors on stderr, so they never mix
//! with the rendered records on stdout.

use anyhow::Result;
use coach_core::notify::Level;
use coach_core::{Notification, Notifier, OperationStatus};
use termimad::{crossterm::style::Color, MadSkin};

/// Renders markdown either styled or as plain text
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Cyan);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }
        for line in markdown.lines() {
            // Headers keep their hashes so nested record titles stay readable.
            if line.starts_with('#') {
                println!("\x1b[32m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
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

/// Prints notifications to stderr as status lines.
///
/// Loading notifications are skipped; a command's own output already tells
/// the user when it is done.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatusNotifier;

impl StatusNotifier {
    fn line(notification: &Notification) -> Option<String> {
        match notification.level {
            Level::Loading => None,
            _ => Some(OperationStatus::from(notification).to_string()),
        }
    }
}

impl Notifier for StatusNotifier {
    fn notify(&self, notification: Notification) {
        if let Some(line) = Self::line(&notification) {
            eprint!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("# Plans\n").is_ok());
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }

    #[test]
    fn status_lines_skip_loading() {
        assert_eq!(
            StatusNotifier::line(&Notification::error("Plan is locked")).as_deref(),
            Some("Error: Plan is locked\n")
        );
        assert!(StatusNotifier::line(&Notification::loading("Saving plan")).is_none());
    }
}
