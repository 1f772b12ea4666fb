/// PlanSummary widget - headline metrics and constraint breakdown of a plan
///
/// Shows required pallets, utilization and the binding constraint as three
/// metric columns, a utilization bar, and the figures behind the plan. When
/// the input is invalid the planner error is shown instead.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::DisplayConfig;
use crate::formatting::{fit_to_width, format_bar, format_percent, group_thousands};
use crate::planner::{PlanBreakdown, PlanError};
use crate::tui::widgets::RenderableWidget;

const DETAIL_LABEL_WIDTH: usize = 20;

pub struct PlanSummary<'a> {
    pub plan: &'a Result<PlanBreakdown, PlanError>,
}

impl<'a> PlanSummary<'a> {
    pub fn new(plan: &'a Result<PlanBreakdown, PlanError>) -> Self {
        Self { plan }
    }

    fn render_plan(&self, plan: &PlanBreakdown, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let width = area.width as usize;
        let column = (width / 3).max(1);
        let metrics = [
            ("Required pallets", group_thousands(plan.result.required_pallets)),
            ("Utilization", format_percent(plan.result.utilization_percent)),
            ("Binding", plan.binding_constraint.label().to_string()),
        ];

        let header_style = Style::default().fg(config.header_fg);
        let value_style = Style::default().add_modifier(Modifier::BOLD);
        for (i, (label, value)) in metrics.iter().enumerate() {
            let x = i * column;
            if x >= width {
                break;
            }
            let max = (width - x).min(column);
            buf.set_stringn(area.x + x as u16, area.y, fit_to_width(label, max), max, header_style);
            if area.height > 1 {
                buf.set_stringn(area.x + x as u16, area.y + 1, fit_to_width(value, max), max, value_style);
            }
        }

        // utilization bar: │███   │ 98.0%
        let percent = format_percent(plan.result.utilization_percent);
        let bar_width = width.saturating_sub(percent.len() + 3);
        if area.height > 3 && bar_width > 0 {
            let bar = format!(
                "{}{}{} {}",
                config.box_chars.vertical,
                format_bar(plan.result.utilization_percent / 100.0, bar_width, config),
                config.box_chars.vertical,
                percent
            );
            buf.set_stringn(area.x, area.y + 3, bar, width, Style::default().fg(config.selection_fg));
        }

        let details = [
            ("Weight constraint", format!("{:.2} pallets", plan.weight_constraint)),
            ("Box constraint", format!("{:.2} pallets", plan.box_constraint)),
            ("Total boxes", format!("{:.2}", plan.total_boxes)),
        ];
        for (i, (label, value)) in details.iter().enumerate() {
            let y = area.y + 5 + i as u16;
            if y >= area.y + area.height {
                break;
            }
            let line = format!("{}{}", fit_to_width(label, DETAIL_LABEL_WIDTH), value);
            buf.set_stringn(area.x, y, line, width, Style::default());
        }
    }
}

impl RenderableWidget for PlanSummary<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        match self.plan {
            Ok(plan) => self.render_plan(plan, area, buf, config),
            Err(e) => {
                let style = Style::default().fg(config.error_fg);
                buf.set_stringn(area.x, area.y, "Cannot plan this shipment", area.width as usize, style);
                if area.height > 1 {
                    buf.set_stringn(area.x, area.y + 1, e.to_string(), area.width as usize, style);
                }
            }
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{breakdown, LoadPlanInput};
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_summary_metrics() {
        let plan = breakdown(&LoadPlanInput::new(12000.0, 48, 15.0, 1200.0));
        let buf = render_widget(&PlanSummary::new(&plan), 60, 8);

        assert_buffer_line(&buf, 0, &format!("{:<20}{:<20}{:<20}", "Required pallets", "Utilization", "Binding"));
        assert_buffer_line(&buf, 1, &format!("{:<20}{:<20}{:<20}", "17", "98.0%", "boxes per pallet"));
        assert_buffer_line(&buf, 5, &format!("{:<60}", "Weight constraint   10.00 pallets"));
        assert_buffer_line(&buf, 6, &format!("{:<60}", "Box constraint      16.67 pallets"));
        assert_buffer_line(&buf, 7, &format!("{:<60}", "Total boxes         800.00"));
    }

    #[test]
    fn test_utilization_bar() {
        let plan = breakdown(&LoadPlanInput::new(14400.0, 48, 15.0, 1200.0));
        let buf = render_widget_with_config(&PlanSummary::new(&plan), 20, 4, &test_config_ascii());
        // 20 wide: "|" + 11 bar + "|" + " 100.0%"
        assert_buffer_line(&buf, 3, "|###########| 100.0%");
    }

    #[test]
    fn test_summary_error() {
        let plan = breakdown(&LoadPlanInput::new(12000.0, 48, 15.0, 0.0));
        let config = test_config();
        let buf = render_widget(&PlanSummary::new(&plan), 70, 3);
        assert!(buffer_line(&buf, 0).starts_with("Cannot plan this shipment"));
        assert!(buffer_line(&buf, 1).contains("pallet_capacity_kg must be greater than zero"));
        assert_eq!(buf[(0, 0)].fg, config.error_fg);
    }
}
