use tracing::trace;

use super::action::Action;
use super::reducers::{reduce_data, reduce_form, reduce_navigation};
use super::state::AppState;

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state. No I/O, no async.
/// Time enters only through the action payload.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok(state) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: AppState, action: Action) -> AppState {
    trace!("REDUCE: {:?}", action);

    let state = match reduce_navigation(state, &action) {
        Ok(state) => return state,
        Err(state) => state,
    };

    let state = match reduce_form(state, &action) {
        Ok(state) => return state,
        Err(state) => state,
    };

    let state = match reduce_data(state, &action) {
        Ok(state) => return state,
        Err(state) => state,
    };

    match action {
        Action::SetStatusMessage { message, is_error } => {
            let mut new_state = state;
            if is_error {
                new_state.system.set_status_error_message(message);
            } else {
                new_state.system.set_status_message(message);
            }
            new_state
        }
        // Quit is handled by the event loop
        _ => state,
    }
}
