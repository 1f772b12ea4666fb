use std::time::SystemTime;

use super::types::Tab;

/// Global actions - like Redux actions
///
/// All state changes in the dashboard happen through actions.
/// Actions are dispatched from:
/// - User input (key events)
/// - The background refresh ticker
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation actions
    NavigateTab(Tab),
    NavigateTabLeft,
    NavigateTabRight,

    // Planner form actions
    SelectNextField,
    SelectPrevField,
    /// Begin editing the selected field with an empty buffer
    StartEdit,
    EditChar(char),
    EditBackspace,
    CommitEdit,
    CancelEdit,
    CyclePreset,
    ResetForm,

    // Data actions
    Tick(SystemTime),

    // System actions
    Quit,
    SetStatusMessage { message: String, is_error: bool },
}
