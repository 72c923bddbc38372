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

//! Keyboard input routing.
//!
//! Raw key events pass through the username editor first (it captures all
//! input while active), then the active view, then the global bindings.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};

use crate::{
    App, MainView, config,
    events::{AppEvent, handlers::request_library_load},
    model::sampler,
    tasks::AppTask,
};

/// Number of decorative covers cycled during the spin animation.
const SHUFFLE_COVER_COUNT: usize = 8;

/// Maps keyboard input to application actions and background tasks.
///
/// This function acts as the primary input router for the TUI, translating
/// low-level [`KeyEvent`]s into high-level domain logic. It handles:
///
/// * **Application Control**: Life-cycle events like exiting the program.
/// * **Editing**: The inline username editor, which captures all input
///   while it is active.
/// * **Navigation**: Moving through the collection browser and switching
///   views.
/// * **The Randomizer**: Spinning, flipping, and playing the picked record.
///
/// # Errors
///
/// Returns an error if an event or task fails to send to its channel.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    if app.username_editor.handle_event(event.clone(), &app.event_tx) {
        return Ok(());
    }

    if app.collection_view.is_active {
        app.collection_view.process_event(&event);
    }

    process_global_key_event(app, key)?;

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        KeyCode::Char('1') => app
            .event_tx
            .send(AppEvent::SetMainView(MainView::Randomizer))?,
        KeyCode::Char('2') => app
            .event_tx
            .send(AppEvent::SetMainView(MainView::Collection))?,

        KeyCode::Char('s') | KeyCode::Char(' ') => start_spin(app)?,

        KeyCode::Char('f') | KeyCode::Enter => {
            if app.randomizer_view.is_active {
                app.randomizer_view.toggle_flip();
            }
        }

        KeyCode::Char('p') => {
            if app.randomizer_view.is_active {
                app.randomizer_view.toggle_playing();
            }
        }

        KeyCode::Char('u') => {
            let current = app.display_username().unwrap_or_default();
            app.username_editor.activate(&current);
        }

        KeyCode::Char('r') => request_library_load(app)?,

        _ => {}
    }

    Ok(())
}

/// Starts a new spin: bumps the generation so stale results are discarded,
/// draws a decorative cover sample for the animation, and hands the pick
/// itself to the background worker.
fn start_spin(app: &mut App) -> Result<()> {
    let Some(username) = config::resolve_username(app.session_username.as_deref(), &app.config)
    else {
        app.last_error = Some("No Discogs username configured, press 'u' to set one".to_owned());
        return Ok(());
    };

    app.spin_generation += 1;
    app.last_error = None;

    let covers = sampler::sample(&app.library, SHUFFLE_COVER_COUNT, None);
    app.randomizer_view.begin_spin(covers);

    app.event_tx
        .send(AppEvent::SetMainView(MainView::Randomizer))?;
    app.task_tx.send(AppTask::SpinRecord {
        generation: app.spin_generation,
        username,
    })?;

    Ok(())
}
