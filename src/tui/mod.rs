use std::io::{self, Stdout};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use thiserror::Error;
use tokio::sync::mpsc;

pub mod app;
pub mod form;
pub mod list;
pub mod notify;

pub use app::App;

use app::NetResponse;

pub type TuiResult<T> = Result<T, TuiError>;

#[derive(Debug, Error)]
pub enum TuiError {
    #[error("failed to initialize terminal: {0}")]
    TerminalInit(String),

    #[error("failed to restore terminal: {0}")]
    TerminalRestore(String),

    #[error("terminal io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

/// Everything the UI loop reacts to: keyboard input, the idle tick that
/// expires notices, and completed network calls.
pub enum AppEvent {
    Input(Event),
    Tick,
    Net(NetResponse),
}

const TICK_RATE: Duration = Duration::from_millis(200);

/// Crossterm reads block, so input lives on its own thread and feeds the
/// async loop over the shared event channel.
fn spawn_input_thread(sender: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        match event::poll(TICK_RATE) {
            Ok(true) => match event::read() {
                Ok(evt) => {
                    if sender.blocking_send(AppEvent::Input(evt)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {
                if sender.blocking_send(AppEvent::Tick).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
}

fn init_terminal() -> TuiResult<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().map_err(|e| TuiError::TerminalInit(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| TuiError::TerminalInit(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| TuiError::TerminalInit(e.to_string()))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> TuiResult<()> {
    disable_raw_mode().map_err(|e| TuiError::TerminalRestore(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| TuiError::TerminalRestore(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| TuiError::TerminalRestore(e.to_string()))?;
    Ok(())
}

/// Sets up the terminal, runs the event loop, and restores the terminal on
/// the way out even if the loop failed.
pub async fn run_tui(mut app: App) -> TuiResult<()> {
    let mut terminal = init_terminal()?;

    let result = run_event_loop(&mut terminal, &mut app).await;

    let restore_result = restore_terminal(&mut terminal);

    result?;
    restore_result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> TuiResult<()> {
    let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(128);
    spawn_input_thread(event_tx.clone());
    app.attach_events(event_tx);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        match event_rx.recv().await {
            Some(AppEvent::Input(event)) => app.handle_event(event),
            Some(AppEvent::Tick) => app.on_tick(),
            Some(AppEvent::Net(response)) => app.handle_net(response),
            None => break,
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
