/// HubMap widget - hub locations on an equirectangular grid
///
/// Longitude maps linearly onto columns and latitude onto rows. The equator
/// is drawn as a guide line. Each hub gets a marker and its code, placed to
/// the right of the marker or, when that would collide, to the left.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::fixtures::Hub;
use crate::tui::widgets::RenderableWidget;

pub struct HubMap<'a> {
    pub hubs: &'a [Hub],
}

impl<'a> HubMap<'a> {
    pub fn new(hubs: &'a [Hub]) -> Self {
        Self { hubs }
    }
}

/// Project a coordinate onto a cell offset inside a `width` x `height` area
pub fn project(lat: f64, lon: f64, width: u16, height: u16) -> (u16, u16) {
    let x = (lon.clamp(-180.0, 180.0) + 180.0) / 360.0 * f64::from(width.saturating_sub(1));
    let y = (90.0 - lat.clamp(-90.0, 90.0)) / 180.0 * f64::from(height.saturating_sub(1));
    (x.round() as u16, y.round() as u16)
}

/// Occupied cells, so labels don't overwrite markers or each other
struct Occupancy {
    width: u16,
    cells: Vec<bool>,
}

impl Occupancy {
    fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            cells: vec![false; width as usize * height as usize],
        }
    }

    fn is_free(&self, x: u16, y: u16, len: u16) -> bool {
        if x + len > self.width {
            return false;
        }
        let start = y as usize * self.width as usize + x as usize;
        self.cells[start..start + len as usize].iter().all(|c| !c)
    }

    fn take(&mut self, x: u16, y: u16, len: u16) {
        let start = y as usize * self.width as usize + x as usize;
        for cell in &mut self.cells[start..start + len as usize] {
            *cell = true;
        }
    }
}

impl RenderableWidget for HubMap<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width < 2 || area.height < 2 {
            return;
        }

        let (_, equator) = project(0.0, 0.0, area.width, area.height);
        buf.set_string(
            area.x,
            area.y + equator,
            config.box_chars.horizontal.repeat(area.width as usize),
            Style::default().fg(Color::DarkGray),
        );

        let mut occupied = Occupancy::new(area.width, area.height);
        let positions: Vec<(u16, u16)> = self
            .hubs
            .iter()
            .map(|hub| project(hub.lat, hub.lon, area.width, area.height))
            .collect();

        let marker_style = Style::default().fg(config.selection_fg);
        for &(x, y) in &positions {
            buf.set_string(area.x + x, area.y + y, &config.box_chars.marker, marker_style);
            occupied.take(x, y, 1);
        }

        let label_style = Style::default().fg(config.header_fg);
        for (hub, &(x, y)) in self.hubs.iter().zip(&positions) {
            let len = hub.code.width() as u16;
            let right = x + 1;
            let left = x.checked_sub(len);
            let slot = if occupied.is_free(right, y, len) {
                Some(right)
            } else {
                left.filter(|&lx| occupied.is_free(lx, y, len))
            };
            if let Some(lx) = slot {
                buf.set_string(area.x + lx, area.y + y, &hub.code, label_style);
                occupied.take(lx, y, len);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::demo_hubs;
    use crate::tui::widgets::testing::*;

    fn hub(code: &str, lat: f64, lon: f64) -> Hub {
        Hub {
            code: code.to_string(),
            name: code.to_string(),
            lat,
            lon,
        }
    }

    #[test]
    fn test_project_corners() {
        assert_eq!(project(90.0, -180.0, 61, 19), (0, 0));
        assert_eq!(project(-90.0, 180.0, 61, 19), (60, 18));
        assert_eq!(project(0.0, 0.0, 61, 19), (30, 9));
    }

    #[test]
    fn test_sydney_marker_and_label() {
        let hubs = demo_hubs();
        let config = test_config();
        let buf = render_widget(&HubMap::new(&hubs), 61, 19);
        // -33.87, 151.21 lands at column 55, row 12
        assert_eq!(buf[(55, 12)].symbol(), "●");
        assert_eq!(buf[(55, 12)].fg, config.selection_fg);
        assert_buffer_line(&buf, 12, &format!("{}●SYD  ", " ".repeat(55)));
    }

    #[test]
    fn test_equator_drawn() {
        let buf = render_widget_with_config(&HubMap::new(&[]), 11, 5, &test_config_ascii());
        assert_buffer_line(&buf, 2, "-----------");
        assert_buffer_line(&buf, 0, "           ");
    }

    #[test]
    fn test_colliding_label_moves_left() {
        let hubs = [hub("AAA", 0.0, 0.0), hub("BBB", 0.0, 18.0)];
        // 21 columns: AAA at 10, BBB at 11
        let buf = render_widget_with_config(&HubMap::new(&hubs), 21, 3, &test_config_ascii());
        assert_buffer_line(&buf, 1, "-------AAA**BBB------");
    }
}
