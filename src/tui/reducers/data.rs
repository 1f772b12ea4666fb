use std::time::SystemTime;
use tracing::debug;

use crate::tui::action::Action;
use crate::tui::state::AppState;

/// Handle refresh ticks from the background ticker
///
/// Returns Ok(new_state) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_data(state: AppState, action: &Action) -> Result<AppState, AppState> {
    match action {
        Action::Tick(now) => Ok(handle_tick(state, *now)),
        _ => Err(state),
    }
}

fn handle_tick(state: AppState, now: SystemTime) -> AppState {
    let mut new_state = state;
    let len = new_state.data.trend.len();
    if len > 0 {
        new_state.data.trend_offset = (new_state.data.trend_offset + 1) % len;
    }
    new_state.system.last_refresh = Some(now);
    debug!("TICK: trend offset now {}", new_state.data.trend_offset);
    new_state
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_tick_advances_trend_and_records_refresh() {
        let now = SystemTime::now();
        let state = reduce_data(AppState::default(), &Action::Tick(now)).unwrap();
        assert_eq!(state.data.trend_offset, 1);
        assert_eq!(state.system.last_refresh, Some(now));
    }

    #[test]
    fn test_tick_wraps_around() {
        let mut state = AppState::default();
        state.data.trend_offset = state.data.trend.len() - 1;
        let state = reduce_data(state, &Action::Tick(SystemTime::now())).unwrap();
        assert_eq!(state.data.trend_offset, 0);
    }

    #[test]
    fn test_tick_with_empty_trend() {
        let mut state = AppState::default();
        state.data.trend = Arc::new(Vec::new());
        let state = reduce_data(state, &Action::Tick(SystemTime::now())).unwrap();
        assert_eq!(state.data.trend_offset, 0);
    }

    #[test]
    fn test_tick_leaves_plan_alone() {
        let before = AppState::default();
        let after = reduce_data(before.clone(), &Action::Tick(SystemTime::now())).unwrap();
        assert_eq!(before.plan, after.plan);
        assert_eq!(before.form.input, after.form.input);
    }
}
