/// Widget-based rendering infrastructure for the dashboard
///
/// Widgets are small, focused components that render themselves directly to
/// a ratatui Buffer and can be tested in isolation.

#[cfg(test)]
pub mod testing;

pub mod hub_map;
pub mod lane_table;
pub mod plan_form;
pub mod plan_summary;
pub mod status_bar;
pub mod tab_bar;
pub mod trend_chart;

pub use hub_map::HubMap;
pub use lane_table::LaneTable;
pub use plan_form::PlanFormWidget;
pub use plan_summary::PlanSummary;
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
pub use trend_chart::TrendChart;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
};
use crate::config::DisplayConfig;

/// Core trait for renderable widgets
///
/// Widgets render themselves directly to a ratatui Buffer, avoiding string-based
/// intermediate representations.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}
