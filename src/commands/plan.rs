use anyhow::{anyhow, Context, Result};

use crate::config::{Config, DisplayConfig, PlanDefaults};
use crate::formatting::{format_bar, format_header, format_kg, format_percent, group_thousands};
use crate::planner::{breakdown, LoadPlanInput, PlanBreakdown};
use crate::presets::{self, PalletPreset};

/// Width of the label column in the plan report
const LABEL_WIDTH: usize = 22;

/// Width of the utilization bar
const UTILIZATION_BAR_WIDTH: usize = 30;

/// Planner inputs as given on the command line
#[derive(Debug, Clone, Default)]
pub struct PlanArgs {
    pub total_weight: Option<f64>,
    pub boxes_per_pallet: Option<u32>,
    pub weight_per_box: Option<f64>,
    pub pallet_capacity: Option<f64>,
    pub preset: Option<String>,
}

/// Build the planner input from config defaults, an optional preset, and explicit flags
///
/// Explicit flags win over the preset, which wins over the config defaults.
pub fn resolve_input(
    args: &PlanArgs,
    defaults: &PlanDefaults,
) -> Result<(LoadPlanInput, Option<&'static PalletPreset>)> {
    let mut input = defaults.to_input();

    let preset = match args.preset.as_deref() {
        Some(key) => {
            let preset = presets::lookup(key).ok_or_else(|| {
                let known: Vec<_> = presets::all().iter().map(|p| p.key).collect();
                anyhow!("Unknown pallet preset '{}'. Known presets: {}", key, known.join(", "))
            })?;
            input = input.with_preset(preset);
            Some(preset)
        }
        None => None,
    };

    if let Some(total) = args.total_weight {
        input.total_weight_kg = total;
    }
    if let Some(boxes) = args.boxes_per_pallet {
        input.boxes_per_pallet = boxes;
    }
    if let Some(per_box) = args.weight_per_box {
        input.weight_per_box_kg = per_box;
    }
    if let Some(capacity) = args.pallet_capacity {
        input.pallet_capacity_kg = capacity;
    }

    Ok((input, preset))
}

fn push_row(output: &mut String, label: &str, value: &str) {
    output.push_str(&format!("{:<width$}{}\n", label, value, width = LABEL_WIDTH));
}

pub fn format_plan(
    input: &LoadPlanInput,
    plan: &PlanBreakdown,
    preset: Option<&PalletPreset>,
    display: &DisplayConfig,
) -> String {
    let mut output = String::new();

    output.push_str(&format_header("Shipment", true, display));
    push_row(&mut output, "Total weight", &format_kg(input.total_weight_kg));
    push_row(&mut output, "Weight per box", &format_kg(input.weight_per_box_kg));
    push_row(&mut output, "Boxes (continuous)", &format!("{:.2}", plan.total_boxes));
    output.push('\n');

    output.push_str(&format_header("Pallet", true, display));
    if let Some(preset) = preset {
        push_row(&mut output, "Preset", preset.name);
    }
    push_row(&mut output, "Capacity", &format_kg(input.pallet_capacity_kg));
    push_row(&mut output, "Boxes per pallet", &input.boxes_per_pallet.to_string());
    output.push('\n');

    output.push_str(&format_header("Load Plan", true, display));
    push_row(&mut output, "Weight constraint", &format!("{:.2} pallets", plan.weight_constraint));
    push_row(&mut output, "Box constraint", &format!("{:.2} pallets", plan.box_constraint));
    push_row(&mut output, "Binding constraint", plan.binding_constraint.label());
    push_row(
        &mut output,
        "Required pallets",
        &group_thousands(plan.result.required_pallets),
    );
    push_row(
        &mut output,
        "Utilization",
        &format!(
            "{}{}{} {}",
            display.box_chars.vertical,
            format_bar(plan.result.utilization_percent / 100.0, UTILIZATION_BAR_WIDTH, display),
            display.box_chars.vertical,
            format_percent(plan.result.utilization_percent)
        ),
    );

    output
}

pub fn run(args: PlanArgs, config: &Config) -> Result<()> {
    let (input, preset) = resolve_input(&args, &config.defaults)?;
    tracing::debug!("Planning load for {:?}", input);

    let plan = breakdown(&input).context("Failed to compute load plan")?;
    tracing::info!(
        "Planned {} pallets at {:.1}% utilization",
        plan.result.required_pallets,
        plan.result.utilization_percent
    );

    println!();
    print!("{}", format_plan(&input, &plan, preset, &config.display));
    Ok(())
}
