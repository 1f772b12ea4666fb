use tracing::debug;

use crate::presets;
use crate::tui::action::Action;
use crate::tui::state::AppState;
use crate::tui::types::FormField;

/// Handle planner form actions
///
/// Every action that changes a committed input value re-runs the planner.
/// Returns Ok(new_state) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_form(state: AppState, action: &Action) -> Result<AppState, AppState> {
    match action {
        Action::SelectNextField => Ok(select_field(state, |f| f.next())),
        Action::SelectPrevField => Ok(select_field(state, |f| f.prev())),
        Action::StartEdit => Ok(start_edit(state)),
        Action::EditChar(c) => Ok(edit_char(state, *c)),
        Action::EditBackspace => Ok(edit_backspace(state)),
        Action::CommitEdit => Ok(commit_edit(state)),
        Action::CancelEdit => Ok(cancel_edit(state)),
        Action::CyclePreset => Ok(cycle_preset(state)),
        Action::ResetForm => Ok(reset_form(state)),
        _ => Err(state),
    }
}

fn select_field(state: AppState, step: impl Fn(FormField) -> FormField) -> AppState {
    let mut new_state = state;
    new_state.form.selected = step(new_state.form.selected);
    new_state.form.editing = None;
    new_state
}

fn start_edit(state: AppState) -> AppState {
    let mut new_state = state;
    new_state.form.editing = Some(String::new());
    new_state
        .system
        .set_status_message("Enter: apply  Esc: cancel".to_string());
    new_state
}

fn edit_char(state: AppState, c: char) -> AppState {
    let mut new_state = state;
    if let Some(buffer) = new_state.form.editing.as_mut() {
        if c.is_ascii_digit() || c == '.' || c == '-' {
            buffer.push(c);
        }
    }
    new_state
}

fn edit_backspace(state: AppState) -> AppState {
    let mut new_state = state;
    if let Some(buffer) = new_state.form.editing.as_mut() {
        buffer.pop();
    }
    new_state
}

fn commit_edit(state: AppState) -> AppState {
    let mut new_state = state;
    let Some(text) = new_state.form.editing.take() else {
        return new_state;
    };
    let field = new_state.form.selected;

    if let Err(message) = new_state.form.set_field(field, &text) {
        debug!("FORM: rejected {:?} = {:?}", field, text);
        new_state.system.set_status_error_message(message);
        return new_state;
    }

    if matches!(field, FormField::BoxesPerPallet | FormField::PalletCapacity) {
        new_state.form.preset = None;
    }
    replan(new_state)
}

fn cancel_edit(state: AppState) -> AppState {
    let mut new_state = state;
    new_state.form.editing = None;
    new_state.system.reset_status_message();
    new_state
}

fn cycle_preset(state: AppState) -> AppState {
    let mut new_state = state;
    let preset = presets::next_after(new_state.form.preset);
    new_state.form.input = new_state.form.input.with_preset(preset);
    new_state.form.preset = Some(preset.key);
    new_state.form.editing = None;
    replan(new_state)
}

fn reset_form(state: AppState) -> AppState {
    let mut new_state = state;
    new_state.form.input = new_state.system.config.defaults.to_input();
    new_state.form.preset = None;
    new_state.form.editing = None;
    replan(new_state)
}

/// Re-run the planner and report the outcome in the status bar
fn replan(state: AppState) -> AppState {
    let mut new_state = state;
    new_state.recompute_plan();
    match &new_state.plan {
        Ok(plan) => {
            let message = format!(
                "{} pallets, {:.1}% utilized ({} bound)",
                plan.result.required_pallets,
                plan.result.utilization_percent,
                plan.binding_constraint
            );
            new_state.system.set_status_message(message);
        }
        Err(e) => {
            let message = e.to_string();
            new_state.system.set_status_error_message(message);
        }
    }
    new_state
}
