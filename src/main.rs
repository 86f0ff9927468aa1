// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Character roster viewer.
//!
//! A terminal viewer for a roster of game characters, built on the
//! `charview` formatting library.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * **Event Threads** capture user input and periodic ticks, the latter
//!   keeping relative "last seen" dates current.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of an error. Communication
//! between the event threads and the UI is handled via `std::sync::mpsc`
//! channels.

mod events;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, widgets::TableState};
use std::{
    env, io,
    path::PathBuf,
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use charview::{
    Character, Formatter,
    config::{self, AppConfig},
    logging, roster,
};

use crate::{
    events::{AppEvent, process_events},
    theme::Theme,
};

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Application state.
struct App {
    pub config: AppConfig,
    pub formatter: Formatter,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub characters: Vec<Character>,
    pub table_state: TableState,

    pub status: Option<String>,

    /// Policy changes are written back only when the configuration file was
    /// read successfully.
    pub persist_config: bool,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, characters: Vec<Character>, persist_config: bool) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let mut table_state = TableState::new();
        if !characters.is_empty() {
            table_state.select(Some(0));
        }

        Self {
            formatter: Formatter::from_config(&config),
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            characters,
            table_state,
            status: None,
            persist_config,
        }
    }

    pub fn selected_character(&self) -> Option<&Character> {
        self.table_state.selected().and_then(|i| self.characters.get(i))
    }

    /// Rebuilds the formatter after a policy change and persists the choice.
    pub fn apply_config(&mut self, status: String) {
        self.formatter = Formatter::from_config(&self.config);

        if !self.persist_config {
            self.status = Some(format!("{status} (not saved, configuration unreadable)"));
            return;
        }

        match config::save_config(&self.config) {
            Ok(()) => self.status = Some(status),
            Err(err) => {
                tracing::warn!(error = %err, "failed to save configuration");
                self.status = Some(format!("{status} (save failed)"));
            }
        }
    }
}

/// The entry point of the application.
///
/// Loads configuration and the roster, manages the terminal lifecycle, and
/// returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let (config, load_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    if let Some(log_path) = log_path() {
        if let Err(err) = logging::init_logging(&config, cfg!(debug_assertions), &log_path) {
            eprintln!("logging disabled: {:#}", anyhow::Error::from(err));
        }
    }

    if let Some(err) = &load_error {
        tracing::warn!(error = %err, "failed to load configuration, using defaults");
        eprintln!(
            "Configuration could not be read ({err}), using defaults without saving changes"
        );
    }

    let roster_path = env::args()
        .nth(1)
        .or_else(|| config.roster_file.clone())
        .context("No roster file given, pass a path or set roster_file in the configuration")?;

    let characters = roster::load_roster(&roster_path)
        .with_context(|| format!("Failed to load roster {roster_path}"))?;

    let mut app = App::new(config, characters, load_error.is_none());

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Log file location, next to the configuration file.
fn log_path() -> Option<PathBuf> {
    let config_path = config::config_path().ok()?;
    let dir = config_path.parent()?;
    std::fs::create_dir_all(dir).ok()?;
    Some(dir.join("charview.log"))
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).context("Failed to set terminal background")?;
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It is best-effort
/// and does not return a result, as it is called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the event threads and enters the main event loop.
///
/// * An input thread forwards keyboard events.
/// * A tick thread triggers periodic redraws so relative dates stay current.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::error!(error = %err, "failed to read terminal event");
                    tx_keys.send(AppEvent::ExitApplication).ok();
                    break;
                }
            }
        }
    });

    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    process_events(terminal, app)
}
