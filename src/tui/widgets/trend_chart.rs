/// TrendChart widget - vertical bars of weekly pallet volume
///
/// Each point takes a three-column bar plus a one-column gap, with its label
/// on the bottom row. Bars are scaled to the largest visible value.
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::config::DisplayConfig;
use crate::fixtures::TrendPoint;
use crate::tui::widgets::RenderableWidget;

const BAR_WIDTH: u16 = 3;
const BAR_GAP: u16 = 1;

pub struct TrendChart<'a> {
    pub points: &'a [&'a TrendPoint],
}

impl<'a> TrendChart<'a> {
    pub fn new(points: &'a [&'a TrendPoint]) -> Self {
        Self { points }
    }

    /// Number of bars that fit in `width` columns
    fn visible_bars(&self, width: u16) -> usize {
        (((width + BAR_GAP) / (BAR_WIDTH + BAR_GAP)) as usize).min(self.points.len())
    }
}

/// Bar height in rows; any non-zero value gets at least one row
fn bar_height(pallets: u64, max: u64, rows: u16) -> u16 {
    if max == 0 || pallets == 0 {
        return 0;
    }
    let scaled = (pallets as f64 / max as f64 * rows as f64).round() as u16;
    scaled.clamp(1, rows)
}

impl RenderableWidget for TrendChart<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width < BAR_WIDTH || area.height < 2 {
            return;
        }

        let count = self.visible_bars(area.width);
        let points = &self.points[..count];
        let max = points.iter().map(|p| p.pallets).max().unwrap_or(0);
        let rows = area.height - 1;
        let label_y = area.y + rows;
        let bar = config.box_chars.bar.repeat(BAR_WIDTH as usize);
        let bar_style = Style::default().fg(config.selection_fg);

        for (i, point) in points.iter().enumerate() {
            let x = area.x + i as u16 * (BAR_WIDTH + BAR_GAP);
            let height = bar_height(point.pallets, max, rows);
            for row in 0..height {
                buf.set_string(x, label_y - 1 - row, &bar, bar_style);
            }
            buf.set_stringn(x, label_y, &point.label, BAR_WIDTH as usize, Style::default());
        }
    }
}
