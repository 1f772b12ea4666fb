/// Frame layout - turns an AppState into a full screen of widgets
///
/// Tab bar on top, the current tab's panels in the middle, status bar at the
/// bottom. Rendering is a pure function of state and the clock text so it
/// can be tested against a plain Buffer.
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders, Widget},
};

use super::state::AppState;
use super::types::Tab;
use super::widgets::status_bar::KeyHint;
use super::widgets::{
    HubMap, LaneTable, PlanFormWidget, PlanSummary, RenderableWidget, StatusBar, TabBar, TrendChart,
};
use crate::config::DisplayConfig;

/// Width of the input panel on the planner tab, borders included
const FORM_PANEL_WIDTH: u16 = 38;

const ASCII_BORDER: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

/// Bordered panel with a title, returning the inner area
fn panel(title: &str, area: Rect, buf: &mut Buffer, config: &DisplayConfig) -> Rect {
    let border_set = if config.use_unicode {
        border::ROUNDED
    } else {
        ASCII_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border_set)
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(config.header_fg));
    let inner = block.inner(area);
    block.render(area, buf);
    inner
}

/// Key hints for the status bar, depending on tab and edit mode
pub fn key_hints(state: &AppState) -> Vec<KeyHint> {
    match state.navigation.current_tab {
        Tab::Planner if state.form.is_editing() => vec![
            KeyHint::new("Enter", "Apply"),
            KeyHint::new("Esc", "Cancel"),
        ],
        Tab::Planner => vec![
            KeyHint::new("q", "Quit"),
            KeyHint::new("Enter", "Edit"),
            KeyHint::new("p", "Preset"),
            KeyHint::new("r", "Reset"),
            KeyHint::new("1-3", "Tabs"),
        ],
        Tab::Lanes | Tab::Network => vec![
            KeyHint::new("q", "Quit"),
            KeyHint::new("1-3", "Tabs"),
        ],
    }
}

/// Render the whole screen
pub fn render(state: &AppState, clock: &str, area: Rect, buf: &mut Buffer) {
    let config = &state.system.config.display;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    TabBar::new(state.navigation.current_tab).render(chunks[0], buf, config);

    match state.navigation.current_tab {
        Tab::Planner => render_planner(state, chunks[1], buf, config),
        Tab::Lanes => render_lanes(state, chunks[1], buf, config),
        Tab::Network => render_network(state, chunks[1], buf, config),
    }

    StatusBar::new(clock)
        .with_message(state.system.status_message.clone(), state.system.status_is_error)
        .with_hints(key_hints(state))
        .render(chunks[2], buf, config);
}

fn render_planner(state: &AppState, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(FORM_PANEL_WIDTH), Constraint::Min(0)])
        .split(area);

    let inner = panel("Shipment", columns[0], buf, config);
    PlanFormWidget::new(&state.form).render(inner, buf, config);

    let inner = panel("Load Plan", columns[1], buf, config);
    PlanSummary::new(&state.plan).render(inner, buf, config);
}

fn render_lanes(state: &AppState, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
    let table = LaneTable::new(&state.data.lanes);
    // Table rows plus the panel border
    let table_height = table.preferred_height().unwrap_or(0) + 2;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(table_height), Constraint::Min(0)])
        .split(area);

    let inner = panel("Lanes (weekly pallets)", rows[0], buf, config);
    table.render(inner, buf, config);

    let points = state.data.visible_trend();
    let inner = panel("Network volume trend", rows[1], buf, config);
    TrendChart::new(&points).render(inner, buf, config);
}

fn render_network(state: &AppState, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
    let inner = panel("Hub Network", area, buf, config);
    HubMap::new(&state.data.hubs).render(inner, buf, config);
}
