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

//! Application logic, event handling, and task dispatching.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. It organizes how various inputs—keystrokes, background task
//! results, ticks—are translated into internal state changes.
//!
//! # Organization
//!
//! * [`handlers`]: State transitions for application events.
//! * [`key_handlers`]: Translation of raw keyboard input to events and
//!   tasks.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

pub(crate) use handlers::request_library_load;

use std::io::Stdout;

use anyhow::{Result, bail};
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App, MainView,
    model::{CatalogEntry, tracklist::RawTracklist},
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    SetMainView(MainView),

    LibraryLoaded(Vec<CatalogEntry>),

    RecordPicked {
        generation: u64,
        entry: CatalogEntry,
    },
    TracklistReady {
        generation: u64,
        tracklist: Option<RawTracklist>,
    },
    NothingToSpin {
        generation: u64,
    },

    UsernameSubmitted(String),

    Tick,

    Error(String),
    FatalError(String),

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed. A fatal error aborts the loop with the error so the caller can
/// report it after the terminal is restored.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::SetMainView(view) => handle_set_main_view(app, view),
            AppEvent::LibraryLoaded(entries) => handle_library_loaded(app, entries),
            AppEvent::RecordPicked { generation, entry } => {
                handle_record_picked(app, generation, entry);
            }
            AppEvent::TracklistReady {
                generation,
                tracklist,
            } => handle_tracklist_ready(app, generation, tracklist),
            AppEvent::NothingToSpin { generation } => handle_nothing_to_spin(app, generation),
            AppEvent::UsernameSubmitted(username) => handle_username_submitted(app, username)?,
            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::FatalError(message) => bail!(message),
            AppEvent::Tick | AppEvent::ExitApplication => handle_tick(app),
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
