use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::reducer::reduce;
use super::state::AppState;

/// Runtime - owns the application state and feeds actions through the reducer
///
/// Actions arrive two ways: directly from the event loop via `dispatch`, or
/// through the channel from background tasks (the refresh ticker). The event
/// loop drains the channel with `process_actions` once per frame.
pub struct Runtime {
    /// Current application state
    state: AppState,

    /// Channel for actions produced outside the event loop
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            state: initial_state,
            action_tx,
            action_rx,
        }
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Sender for background tasks to queue actions
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Run an action through the reducer
    ///
    /// Uses mem::take to hand the state to the reducer without cloning it.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    /// Drain queued actions, returning how many were processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        if count > 0 {
            debug!("RUNTIME: Processed {} queued actions", count);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::types::Tab;
    use std::time::SystemTime;

    #[test]
    fn test_dispatch_updates_state() {
        let mut runtime = Runtime::new(AppState::default());
        runtime.dispatch(Action::NavigateTab(Tab::Network));
        assert_eq!(runtime.state().navigation.current_tab, Tab::Network);
    }

    #[test]
    fn test_queued_actions_processed_in_order() {
        let mut runtime = Runtime::new(AppState::default());
        let tx = runtime.action_sender();
        tx.send(Action::NavigateTab(Tab::Lanes)).unwrap();
        tx.send(Action::NavigateTabRight).unwrap();
        tx.send(Action::Tick(SystemTime::UNIX_EPOCH)).unwrap();

        assert_eq!(runtime.process_actions(), 3);
        assert_eq!(runtime.state().navigation.current_tab, Tab::Network);
        assert_eq!(runtime.state().data.trend_offset, 1);
        assert_eq!(runtime.process_actions(), 0);
    }

    #[test]
    fn test_queued_action_after_dispatch() {
        let mut runtime = Runtime::new(AppState::default());
        runtime.dispatch(Action::SelectNextField);
        runtime.action_sender().send(Action::CyclePreset).unwrap();
        runtime.process_actions();
        assert_eq!(runtime.state().form.preset, Some("au"));
    }
}
