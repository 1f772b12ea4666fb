/// StatusBar widget - displays status information and keyboard hints at the bottom of the screen
///
/// This widget renders a two-line status bar with:
/// - Top line: horizontal separator with connector aligned to the vertical bar
/// - Bottom line: status message (or key hints) │ clock
///
/// Error messages are displayed with the error color.
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

/// Represents a keyboard hint displayed in the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct KeyHint {
    pub key: String,
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

#[derive(Debug)]
pub struct StatusBar {
    pub message: Option<String>,
    pub is_error: bool,
    /// Pre-formatted clock text shown at the right
    pub clock: String,
    /// Hints shown when there is no status message
    pub hints: Vec<KeyHint>,
}

impl StatusBar {
    pub fn new(clock: impl Into<String>) -> Self {
        Self {
            message: None,
            is_error: false,
            clock: clock.into(),
            hints: vec![
                KeyHint::new("q", "Quit"),
                KeyHint::new("1-3", "Tabs"),
            ],
        }
    }

    pub fn with_message(mut self, message: Option<String>, is_error: bool) -> Self {
        self.message = message;
        self.is_error = is_error;
        self
    }

    pub fn with_hints(mut self, hints: Vec<KeyHint>) -> Self {
        self.hints = hints;
        self
    }

    /// Build the left side text: error, status message, or key hints
    fn build_left_text(&self) -> String {
        match &self.message {
            Some(msg) if self.is_error => format!("ERROR: {}", msg),
            Some(msg) => msg.clone(),
            None => self
                .hints
                .iter()
                .map(|h| format!("{} {}", h.key, h.action))
                .collect::<Vec<_>>()
                .join("  "),
        }
    }

    /// Build the top separator line with connector
    fn build_separator_line(&self, area_width: usize, bar_position: usize, config: &DisplayConfig) -> String {
        let horizontal = &config.box_chars.horizontal;
        format!(
            "{}{}{}",
            horizontal.repeat(bar_position),
            config.box_chars.top_junction,
            horizontal.repeat(area_width.saturating_sub(bar_position + 1))
        )
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        // Layout: [space][left text][padding]│[space][clock][space]
        let right_width = self.clock.width() + 2;
        let bar_position = (area.width as usize).saturating_sub(right_width + 1);

        let separator = self.build_separator_line(area.width as usize, bar_position, config);
        buf.set_stringn(area.x, area.y, &separator, area.width as usize, Style::default());

        let left_style = if self.is_error && self.message.is_some() {
            Style::default().fg(config.error_fg)
        } else {
            Style::default()
        };
        let left_text = self.build_left_text();
        if bar_position > 1 {
            buf.set_stringn(area.x + 1, area.y + 1, &left_text, bar_position - 1, left_style);
        }

        let right = format!("{} {} ", config.box_chars.vertical, self.clock);
        buf.set_stringn(
            area.x + bar_position as u16,
            area.y + 1,
            &right,
            area.width as usize - bar_position,
            Style::default(),
        );
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Separator line + status line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_status_bar_with_message() {
        let widget = StatusBar::new("12:00:00").with_message(Some("Saved".to_string()), false);
        let buf = render_widget(&widget, 40, 2);
        assert_buffer_line(&buf, 0, "─────────────────────────────┬──────────");
        assert_buffer_line(&buf, 1, " Saved                       │ 12:00:00 ");
    }

    #[test]
    fn test_status_bar_shows_hints_without_message() {
        let widget = StatusBar::new("12:00:00");
        let buf = render_widget(&widget, 40, 2);
        assert_buffer_line(&buf, 1, " q Quit  1-3 Tabs            │ 12:00:00 ");
    }

    #[test]
    fn test_status_bar_error_colored() {
        let config = test_config();
        let widget = StatusBar::new("12:00:00").with_message(Some("bad input".to_string()), true);
        let buf = render_widget(&widget, 40, 2);
        assert!(buffer_line(&buf, 1).starts_with(" ERROR: bad input"));
        assert_eq!(buf[(1, 1)].fg, config.error_fg);
    }

    #[test]
    fn test_long_message_truncated_before_bar() {
        let widget = StatusBar::new("12:00:00").with_message(Some("x".repeat(100)), false);
        let buf = render_widget(&widget, 40, 2);
        let line = buffer_line(&buf, 1);
        assert!(line.ends_with("│ 12:00:00 "));
        assert_eq!(buf[(29, 1)].symbol(), "│");
    }

    #[test]
    fn test_custom_hints() {
        let widget = StatusBar::new("").with_hints(vec![KeyHint::new("p", "Preset")]);
        let buf = render_widget(&widget, 20, 2);
        assert!(buffer_line(&buf, 1).starts_with(" p Preset"));
    }
}
