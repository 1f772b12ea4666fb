/// TabBar widget - displays main navigation tabs
///
/// Renders a horizontal bar with the dashboard tabs and their shortcut
/// digits, and a separator line with connectors under the tab gaps.
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::tui::types::Tab;
use crate::tui::widgets::RenderableWidget;

#[derive(Debug)]
pub struct TabBar {
    pub current: Tab,
}

impl TabBar {
    pub fn new(current: Tab) -> Self {
        Self { current }
    }

    fn tab_label(tab: Tab) -> String {
        format!("{} {}", tab.index() + 1, tab.label())
    }

    /// Build the tab line with separators
    fn build_tab_line(&self, config: &DisplayConfig) -> Vec<(String, Style)> {
        let separator = format!(" {} ", config.box_chars.vertical);
        let mut segments = Vec::new();

        for (i, tab) in Tab::all().into_iter().enumerate() {
            if i > 0 {
                segments.push((separator.clone(), Style::default()));
            }
            let style = if tab == self.current {
                Style::default().fg(config.selection_fg)
            } else {
                Style::default()
            };
            segments.push((Self::tab_label(tab), style));
        }

        segments
    }

    /// Build the separator line with connectors under tab gaps
    fn build_separator_line(&self, area_width: usize, config: &DisplayConfig) -> String {
        let horizontal = &config.box_chars.horizontal;
        let mut line = String::new();
        let mut pos = 0;

        for (i, tab) in Tab::all().into_iter().enumerate() {
            if i > 0 {
                line.push_str(horizontal);
                line.push_str(&config.box_chars.bottom_junction);
                line.push_str(horizontal);
                pos += 3;
            }
            let width = Self::tab_label(tab).width();
            line.push_str(&horizontal.repeat(width));
            pos += width;
        }

        if pos < area_width {
            line.push_str(&horizontal.repeat(area_width - pos));
        }
        line
    }
}

impl RenderableWidget for TabBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        let mut x = area.x;
        for (text, style) in self.build_tab_line(config) {
            if x >= area.x + area.width {
                break;
            }
            buf.set_stringn(x, area.y, &text, (area.x + area.width - x) as usize, style);
            x += text.width() as u16;
        }

        let separator = self.build_separator_line(area.width as usize, config);
        buf.set_stringn(area.x, area.y + 1, &separator, area.width as usize, Style::default());
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Tab line + separator line
    }
}
