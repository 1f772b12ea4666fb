/// LaneTable widget - weekly pallet volume per lane
///
/// Uses the same fixed-width rows as the `lanes` command. Lanes with an
/// on-time rate under `ON_TIME_WARNING` are drawn in the error color.
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::commands::lanes::{lane_header_row, lane_row, lane_total_row, TABLE_WIDTH};
use crate::config::DisplayConfig;
use crate::fixtures::Lane;
use crate::tui::widgets::RenderableWidget;

const ON_TIME_WARNING: f64 = 90.0;

pub struct LaneTable<'a> {
    pub lanes: &'a [Lane],
}

impl<'a> LaneTable<'a> {
    pub fn new(lanes: &'a [Lane]) -> Self {
        Self { lanes }
    }
}

impl RenderableWidget for LaneTable<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;
        let bottom = area.y + area.height;
        let separator = config.box_chars.horizontal.repeat(TABLE_WIDTH.min(width));

        let mut y = area.y;
        buf.set_stringn(area.x, y, lane_header_row(), width, Style::default().fg(config.header_fg));
        y += 1;
        if y < bottom {
            buf.set_stringn(area.x, y, &separator, width, Style::default());
            y += 1;
        }

        // Keep the last two rows for the footer when space is short
        let footer_rows = 2;
        for lane in self.lanes {
            if y + footer_rows >= bottom {
                break;
            }
            let style = if lane.on_time_percent < ON_TIME_WARNING {
                Style::default().fg(config.error_fg)
            } else {
                Style::default()
            };
            buf.set_stringn(area.x, y, lane_row(lane), width, style);
            y += 1;
        }

        if y + 1 < bottom {
            buf.set_stringn(area.x, y, &separator, width, Style::default());
            buf.set_stringn(area.x, y + 1, lane_total_row(self.lanes), width, Style::default());
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(self.lanes.len() as u16 + 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::demo_lanes;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_lane_table_rendering() {
        let lanes = demo_lanes();
        let widget = LaneTable::new(&lanes[..2]);
        let buf = render_widget(&widget, 50, 6);
        assert_buffer_line(&buf, 0, "Origin       Destination  Mode    Pallets  On-time");
        assert_buffer_line(&buf, 1, &"─".repeat(50));
        assert_buffer_line(&buf, 2, "Rotterdam    Duisburg     Rail      1,840    96.5%");
        assert_buffer_line(&buf, 3, "Shanghai     Rotterdam    Sea       1,525    88.2%");
        assert_buffer_line(&buf, 5, "Total                               3,365         ");
    }

    #[test]
    fn test_late_lanes_use_error_color() {
        let config = test_config();
        let lanes = demo_lanes();
        let buf = render_widget(&LaneTable::new(&lanes[..2]), 50, 6);
        assert_ne!(buf[(0, 2)].fg, config.error_fg);
        assert_eq!(buf[(0, 3)].fg, config.error_fg);
    }

    #[test]
    fn test_short_area_keeps_total() {
        let lanes = demo_lanes();
        let buf = render_widget(&LaneTable::new(&lanes), 50, 6);
        assert!(buffer_line(&buf, 3).starts_with("Shanghai"));
        assert!(buffer_line(&buf, 5).starts_with("Total"));
        assert!(buffer_line(&buf, 5).contains("7,570"));
    }

    #[test]
    fn test_preferred_height() {
        let lanes = demo_lanes();
        assert_eq!(LaneTable::new(&lanes).preferred_height(), Some(12));
    }
}
