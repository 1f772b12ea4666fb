pub mod action;
pub mod keys;
pub mod reducer;
pub mod reducers;
pub mod runtime;
pub mod state;
pub mod types;
pub mod view;
pub mod widgets;

pub use action::Action;
pub use keys::key_to_action;
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::AppState;
pub use types::{FormField, Tab};

use std::fmt::Write as _;
use std::io;
use std::time::{Duration, SystemTime};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::config::Config;

/// Send a Tick every `interval_secs` until the receiver goes away
fn spawn_ticker(interval_secs: u32, tx: mpsc::UnboundedSender<Action>) {
    if interval_secs == 0 {
        tracing::debug!("TICK: refresh disabled");
        return;
    }
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(u64::from(interval_secs)));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            if tx.send(Action::Tick(SystemTime::now())).is_err() {
                break;
            }
        }
    });
}

/// Main entry point for TUI mode
pub async fn run(config: Config) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let refresh_interval = config.refresh_interval;
    let time_format = config.time_format.clone();
    let mut runtime = Runtime::new(AppState::new(config));
    spawn_ticker(refresh_interval, runtime.action_sender());
    if refresh_interval == 0 {
        runtime.dispatch(Action::SetStatusMessage {
            message: "Trend refresh disabled (refresh_interval = 0)".to_string(),
            is_error: false,
        });
    }

    let result = event_loop(&mut terminal, &mut runtime, &time_format);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Current local time in the configured format
///
/// An invalid format string makes chrono's Display fail, so fall back to a
/// placeholder instead of panicking mid-frame.
fn format_clock(time_format: &str) -> String {
    let mut clock = String::new();
    if write!(clock, "{}", chrono::Local::now().format(time_format)).is_err() {
        return "--:--".to_string();
    }
    clock
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &mut Runtime,
    time_format: &str,
) -> Result<(), io::Error> {
    loop {
        // Queued ticks first so the frame shows them
        runtime.process_actions();

        terminal.draw(|f| {
            let clock = format_clock(time_format);
            let area = f.area();
            view::render(runtime.state(), &clock, area, f.buffer_mut());
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            // Windows terminals report releases too
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key_to_action(key, runtime.state()) {
                Some(Action::Quit) => {
                    tracing::debug!("ACTION: Quitting application");
                    return Ok(());
                }
                Some(action) => runtime.dispatch(action),
                None => {}
            }
        }
    }
}
