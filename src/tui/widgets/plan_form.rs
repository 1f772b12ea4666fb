/// PlanFormWidget - the four planner inputs with selection and edit cursor
use ratatui::{buffer::Buffer, layout::Rect, style::{Modifier, Style}};

use crate::config::DisplayConfig;
use crate::formatting::fit_to_width;
use crate::presets;
use crate::tui::state::PlanForm;
use crate::tui::types::FormField;
use crate::tui::widgets::RenderableWidget;

/// Width of the field label column
const LABEL_WIDTH: usize = 22;

/// Rows between the preset line and the first field
const FIELDS_TOP: u16 = 2;

pub struct PlanFormWidget<'a> {
    pub form: &'a PlanForm,
}

impl<'a> PlanFormWidget<'a> {
    pub fn new(form: &'a PlanForm) -> Self {
        Self { form }
    }

    fn preset_line(&self) -> String {
        let name = self
            .form
            .preset
            .and_then(presets::lookup)
            .map(|p| p.name)
            .unwrap_or("custom");
        format!("Preset: {}", name)
    }

    fn field_text(&self, field: FormField) -> String {
        match (&self.form.editing, field == self.form.selected) {
            (Some(buffer), true) => format!("{}_", buffer),
            _ => self.form.field_value(field),
        }
    }
}

impl RenderableWidget for PlanFormWidget<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;

        buf.set_stringn(area.x, area.y, self.preset_line(), width, Style::default().fg(config.header_fg));

        for (i, field) in FormField::all().into_iter().enumerate() {
            let y = area.y + FIELDS_TOP + i as u16;
            if y >= area.y + area.height {
                return;
            }

            let selected = field == self.form.selected;
            let selector = if selected { config.box_chars.selector.as_str() } else { " " };
            let label_style = if selected {
                Style::default().fg(config.selection_fg)
            } else {
                Style::default()
            };
            let value_style = if selected && self.form.is_editing() {
                label_style.add_modifier(Modifier::UNDERLINED)
            } else {
                label_style
            };

            let label = format!("{} {}", selector, fit_to_width(field.label(), LABEL_WIDTH));
            buf.set_stringn(area.x, y, &label, width, label_style);
            let value_x = LABEL_WIDTH + 2;
            if value_x < width {
                buf.set_stringn(
                    area.x + value_x as u16,
                    y,
                    self.field_text(field),
                    width - value_x,
                    value_style,
                );
            }
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(FIELDS_TOP + FormField::all().len() as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::LoadPlanInput;
    use crate::tui::widgets::testing::*;

    fn form() -> PlanForm {
        PlanForm::new(LoadPlanInput::new(12000.0, 48, 15.0, 1200.0))
    }

    #[test]
    fn test_plan_form_rendering() {
        let form = form();
        let buf = render_widget(&PlanFormWidget::new(&form), 32, 6);
        assert_buffer_line(&buf, 0, "Preset: custom                  ");
        assert_buffer_line(&buf, 2, "► Total weight (kg)     12000   ");
        assert_buffer_line(&buf, 3, "  Boxes per pallet      48      ");
        assert_buffer_line(&buf, 4, "  Weight per box (kg)   15      ");
        assert_buffer_line(&buf, 5, "  Pallet capacity (kg)  1200    ");
    }

    #[test]
    fn test_editing_shows_buffer_and_cursor() {
        let mut form = form();
        form.selected = FormField::BoxesPerPallet;
        form.editing = Some("3".to_string());
        let buf = render_widget(&PlanFormWidget::new(&form), 32, 6);
        assert_buffer_line(&buf, 3, "► Boxes per pallet      3_      ");
        assert!(buf[(24, 3)].modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_preset_name_shown() {
        let mut form = form();
        form.preset = Some("eur1");
        let buf = render_widget(&PlanFormWidget::new(&form), 32, 1);
        assert!(buffer_line(&buf, 0).starts_with("Preset: EUR 1 (1200x800)"));
    }

    #[test]
    fn test_selected_row_colored() {
        let config = test_config();
        let form = form();
        let buf = render_widget(&PlanFormWidget::new(&form), 32, 6);
        assert_eq!(buf[(2, 2)].fg, config.selection_fg);
        assert_ne!(buf[(2, 3)].fg, config.selection_fg);
    }
}
