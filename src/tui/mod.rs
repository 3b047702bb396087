// File: ./src/tui/mod.rs
pub mod action;
pub mod input;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::logging;
use crate::store::TaskStore;
use crate::tui::action::Action;
use crate::tui::state::AppState;
use anyhow::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tokio::sync::mpsc;

type Term = Terminal<CrosstermBackend<Stdout>>;

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        use std::io::Write;
        let _ = restore_terminal();
        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(logging::panic_log_path())
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        default_hook(info);
    }));
}

pub async fn run(store: TaskStore, config: Config) -> Result<()> {
    install_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::new(store, config);
    let result = event_loop(&mut terminal, &mut app_state).await;

    restore_terminal()?;
    terminal.show_cursor()?;
    result
}

async fn event_loop(terminal: &mut Term, app_state: &mut AppState) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let mut events = EventStream::new();

    loop {
        terminal.draw(|f| view::draw(f, app_state))?;

        tokio::select! {
            // Drain queued mutations before reading more input.
            biased;

            Some(action) = action_rx.recv() => {
                if action == Action::Quit {
                    tracing::debug!("quit requested");
                    break;
                }
                app_state.apply(action);
            }

            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = input::handle_key(app_state, key) {
                        action_tx.send(action)?;
                    }
                }
                Some(Ok(Event::Mouse(mouse_event))) => {
                    input::handle_mouse(app_state, mouse_event.kind);
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
        }
    }
    Ok(())
}
