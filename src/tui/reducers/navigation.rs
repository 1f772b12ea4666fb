use tracing::trace;

use crate::tui::action::Action;
use crate::tui::state::AppState;
use crate::tui::types::Tab;

/// Handle all navigation-related actions
///
/// Returns Ok(new_state) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_navigation(state: AppState, action: &Action) -> Result<AppState, AppState> {
    match action {
        Action::NavigateTab(tab) => Ok(navigate_to_tab(state, *tab)),
        Action::NavigateTabLeft => {
            let tab = state.navigation.current_tab.prev();
            Ok(navigate_to_tab(state, tab))
        }
        Action::NavigateTabRight => {
            let tab = state.navigation.current_tab.next();
            Ok(navigate_to_tab(state, tab))
        }
        _ => Err(state),
    }
}

fn navigate_to_tab(state: AppState, tab: Tab) -> AppState {
    trace!("Navigating to tab: {:?}", tab);
    let mut new_state = state;
    new_state.navigation.current_tab = tab;
    // An edit in progress does not survive leaving the planner
    new_state.form.editing = None;
    new_state
}
