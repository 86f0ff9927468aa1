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

//! Event handling for the viewer.
//!
//! Raw input and tick events arrive over the application channel and are
//! translated into table navigation and display policy changes.

use std::io::Stdout;

use anyhow::Result;
use charview::{date::DatePolicy, format::NumberStyle, vocation::TokenScheme};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Tick,
    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,
            AppEvent::Key(key) => {
                if !process_key_event(app, key) {
                    break;
                }
            }
            AppEvent::Tick => {}
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a key press to the application state.
///
/// Returns `false` when the key asks the application to quit.
pub(crate) fn process_key_event(app: &mut App, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => return false,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return false,

        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => goto_next(app),
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => goto_previous(app),
        (KeyCode::Char('g'), _) | (KeyCode::Home, _) => app.table_state.select_first(),
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => app.table_state.select_last(),

        (KeyCode::Char('d'), _) => {
            app.config.date_policy = match app.config.date_policy {
                DatePolicy::Relative => DatePolicy::Absolute,
                DatePolicy::Absolute => DatePolicy::Relative,
            };
            let status = format!("Date policy: {:?}", app.config.date_policy);
            app.apply_config(status);
        }
        (KeyCode::Char('t'), _) => {
            app.config.token_scheme = match app.config.token_scheme {
                TokenScheme::Family => TokenScheme::Severity,
                TokenScheme::Severity => TokenScheme::Family,
            };
            let status = format!("Token scheme: {:?}", app.config.token_scheme);
            app.apply_config(status);
        }
        (KeyCode::Char('n'), _) => {
            app.config.number_style = match app.config.number_style {
                NumberStyle::Grouped => NumberStyle::Plain,
                NumberStyle::Plain => NumberStyle::Grouped,
            };
            let status = format!("Number style: {:?}", app.config.number_style);
            app.apply_config(status);
        }

        (KeyCode::Enter, _) => {
            app.status = app
                .selected_character()
                .map(|c| app.formatter.profile_url(c));
        }

        _ => {}
    }

    true
}

fn goto_next(app: &mut App) {
    let len = app.characters.len();
    if len == 0 {
        return;
    }
    let i = match app.table_state.selected() {
        Some(i) => {
            if i >= len - 1 {
                0
            } else {
                i + 1
            }
        }
        None => 0,
    };
    app.table_state.select(Some(i));
}

fn goto_previous(app: &mut App) {
    let len = app.characters.len();
    if len == 0 {
        return;
    }
    let i = match app.table_state.selected() {
        Some(i) => {
            if i == 0 {
                len - 1
            } else {
                i - 1
            }
        }
        None => 0,
    };
    app.table_state.select(Some(i));
}

#[cfg(test)]
mod tests {
    use super::*;
    use charview::{Character, config::AppConfig};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn unsaved_app(count: usize) -> App {
        let characters = (0..count)
            .map(|i| Character::new(format!("Char {i}"), "Antica"))
            .collect();
        App::new(AppConfig::default(), characters, false)
    }

    #[test]
    fn toggles_apply_without_saving_a_fallback_config() {
        let mut app = unsaved_app(1);

        assert!(process_key_event(&mut app, press(KeyCode::Char('d'))));
        assert_eq!(app.config.date_policy, DatePolicy::Absolute);
        assert_eq!(app.formatter.date_policy(), DatePolicy::Absolute);

        let status = app.status.as_deref().unwrap_or_default();
        assert!(status.starts_with("Date policy: Absolute"));
        assert!(status.contains("not saved"));
    }

    #[test]
    fn navigation_wraps_around() {
        let mut app = unsaved_app(3);

        process_key_event(&mut app, press(KeyCode::Up));
        assert_eq!(app.table_state.selected(), Some(2));
        process_key_event(&mut app, press(KeyCode::Down));
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    fn quit_keys_stop_the_loop() {
        let mut app = unsaved_app(0);
        assert!(!process_key_event(&mut app, press(KeyCode::Char('q'))));
        assert!(!process_key_event(&mut app, press(KeyCode::Esc)));
        assert!(process_key_event(&mut app, press(KeyCode::Down)));
    }
}
