use std::sync::Arc;
use std::time::SystemTime;

use crate::config::Config;
use crate::fixtures::{demo_hubs, demo_lanes, demo_trend, Hub, Lane, TrendPoint};
use crate::planner::{breakdown, LoadPlanInput, PlanBreakdown, PlanError};

use super::types::{FormField, Tab};

/// Root application state - single source of truth
///
/// All state changes happen through the reducer. Planner inputs live here
/// and are passed to the planner explicitly whenever they change.
#[derive(Debug, Clone)]
pub struct AppState {
    pub navigation: NavigationState,
    pub form: PlanForm,
    /// Outcome of planning the current form input
    pub plan: Result<PlanBreakdown, PlanError>,
    pub data: DataState,
    pub system: SystemState,
}

#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub current_tab: Tab,
}

/// Planner form: committed input values plus an optional edit in progress
#[derive(Debug, Clone)]
pub struct PlanForm {
    pub input: LoadPlanInput,
    pub selected: FormField,
    /// Text buffer of the field being edited (None = not editing)
    pub editing: Option<String>,
    /// Key of the preset last applied, if any
    pub preset: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct DataState {
    // Fixture data - wrapped in Arc to avoid deep clones on every reducer call
    pub lanes: Arc<Vec<Lane>>,
    pub trend: Arc<Vec<TrendPoint>>,
    pub hubs: Arc<Vec<Hub>>,
    /// First trend point shown; advances on every refresh tick
    pub trend_offset: usize,
}

#[derive(Debug, Clone)]
pub struct SystemState {
    pub config: Config,
    pub last_refresh: Option<SystemTime>,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let input = config.defaults.to_input();
        Self {
            navigation: NavigationState::default(),
            form: PlanForm::new(input),
            plan: breakdown(&input),
            data: DataState::default(),
            system: SystemState::new(config),
        }
    }

    /// Re-run the planner on the committed form input
    pub fn recompute_plan(&mut self) {
        self.plan = breakdown(&self.form.input);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl PlanForm {
    pub fn new(input: LoadPlanInput) -> Self {
        Self {
            input,
            selected: FormField::default(),
            editing: None,
            preset: None,
        }
    }

    /// Committed value of a field, formatted for display
    pub fn field_value(&self, field: FormField) -> String {
        match field {
            FormField::TotalWeight => format_number(self.input.total_weight_kg),
            FormField::BoxesPerPallet => self.input.boxes_per_pallet.to_string(),
            FormField::WeightPerBox => format_number(self.input.weight_per_box_kg),
            FormField::PalletCapacity => format_number(self.input.pallet_capacity_kg),
        }
    }

    /// Parse `text` and store it in `field`
    ///
    /// Only checks that the text is a number of the right kind; range checks
    /// are left to the planner so its error reaches the user.
    pub fn set_field(&mut self, field: FormField, text: &str) -> Result<(), String> {
        let text = text.trim();
        if field.is_integer() {
            let value = text
                .parse::<u32>()
                .map_err(|_| format!("{}: '{}' is not a whole number", field.label(), text))?;
            self.input.boxes_per_pallet = value;
        } else {
            let value = text
                .parse::<f64>()
                .map_err(|_| format!("{}: '{}' is not a number", field.label(), text))?;
            match field {
                FormField::TotalWeight => self.input.total_weight_kg = value,
                FormField::WeightPerBox => self.input.weight_per_box_kg = value,
                FormField::PalletCapacity => self.input.pallet_capacity_kg = value,
                FormField::BoxesPerPallet => unreachable!("integer field handled above"),
            }
        }
        Ok(())
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }
}

/// Display a float without a trailing ".0"
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

impl Default for DataState {
    fn default() -> Self {
        Self {
            lanes: Arc::new(demo_lanes()),
            trend: Arc::new(demo_trend()),
            hubs: Arc::new(demo_hubs()),
            trend_offset: 0,
        }
    }
}

impl DataState {
    /// Trend points starting at the current offset, wrapping around
    pub fn visible_trend(&self) -> Vec<&TrendPoint> {
        let len = self.trend.len();
        (0..len)
            .map(|i| &self.trend[(self.trend_offset + i) % len])
            .collect()
    }
}

impl SystemState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            last_refresh: None,
            status_message: None,
            status_is_error: false,
        }
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = None;
        self.status_is_error = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_plan_uses_config_defaults() {
        let state = AppState::default();
        let plan = state.plan.as_ref().unwrap();
        assert_eq!(plan.result.required_pallets, 17);
        assert!(!state.form.is_editing());
    }

    #[test]
    fn test_initial_plan_error_from_bad_defaults() {
        let mut config = Config::default();
        config.defaults.pallet_capacity_kg = 0.0;
        let state = AppState::new(config);
        assert_eq!(state.plan.unwrap_err().field(), "pallet_capacity_kg");
    }

    #[test]
    fn test_field_value_formatting() {
        let form = PlanForm::new(LoadPlanInput::new(12000.0, 48, 12.5, 1200.0));
        assert_eq!(form.field_value(FormField::TotalWeight), "12000");
        assert_eq!(form.field_value(FormField::BoxesPerPallet), "48");
        assert_eq!(form.field_value(FormField::WeightPerBox), "12.5");
    }

    #[test]
    fn test_set_field_parses_numbers() {
        let mut form = PlanForm::new(LoadPlanInput::new(12000.0, 48, 15.0, 1200.0));
        form.set_field(FormField::PalletCapacity, " 1500.5 ").unwrap();
        assert_eq!(form.input.pallet_capacity_kg, 1500.5);
        form.set_field(FormField::BoxesPerPallet, "30").unwrap();
        assert_eq!(form.input.boxes_per_pallet, 30);
    }

    #[test]
    fn test_set_field_rejects_bad_text() {
        let mut form = PlanForm::new(LoadPlanInput::new(12000.0, 48, 15.0, 1200.0));
        assert!(form.set_field(FormField::BoxesPerPallet, "4.5").is_err());
        assert!(form.set_field(FormField::TotalWeight, "lots").is_err());
        assert_eq!(form.input.boxes_per_pallet, 48);
        assert_eq!(form.input.total_weight_kg, 12000.0);
    }

    #[test]
    fn test_visible_trend_wraps() {
        let mut data = DataState::default();
        data.trend_offset = 10;
        let labels: Vec<_> = data.visible_trend().iter().map(|p| p.label.clone()).collect();
        assert_eq!(labels[0], "W11");
        assert_eq!(labels[2], "W01");
        assert_eq!(labels.len(), 12);
    }
}
