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

use anyhow::Result;

use crate::{
    App, MainView, config,
    model::{CatalogEntry, sampler, tracklist, tracklist::RawTracklist},
    tasks::AppTask,
};

/// Number of sampled covers stacked behind the presented record.
const BACKDROP_STACK_SIZE: usize = 3;

pub(super) fn handle_set_main_view(app: &mut App, main_view: MainView) {
    app.randomizer_view.is_active = matches!(main_view, MainView::Randomizer);
    app.collection_view.is_active = matches!(main_view, MainView::Collection);
    app.main_view = main_view;
}

pub(super) fn handle_library_loaded(app: &mut App, entries: Vec<CatalogEntry>) {
    app.last_error = None;
    app.library = entries;
    app.collection_view.set_records(app.library.clone());
}

/// Presents the primary pick together with a backdrop stack sampled from the
/// library, excluding the pick itself. Results of superseded spins are
/// discarded.
pub(super) fn handle_record_picked(app: &mut App, generation: u64, entry: CatalogEntry) {
    if generation != app.spin_generation {
        return;
    }

    let backdrop = sampler::sample(&app.library, BACKDROP_STACK_SIZE, Some(entry.id));
    app.randomizer_view.present_record(entry, backdrop);
}

pub(super) fn handle_tracklist_ready(
    app: &mut App,
    generation: u64,
    raw: Option<RawTracklist>,
) {
    if generation != app.spin_generation {
        return;
    }

    app.randomizer_view.set_tracklist(tracklist::partition(raw));
}

/// An empty-collection result is still a spin result; one from a superseded
/// spin is discarded like any other.
pub(super) fn handle_nothing_to_spin(app: &mut App, generation: u64) {
    if generation != app.spin_generation {
        return;
    }

    app.randomizer_view.reset();
    app.last_error = Some("The collection is empty, nothing to spin".to_owned());
}

/// Applies an edited username: it becomes the session override, is persisted
/// to the configuration file, and the library is reloaded under the new
/// name.
pub(super) fn handle_username_submitted(app: &mut App, username: String) -> Result<()> {
    app.session_username = Some(username.clone());
    app.config.discogs_username = Some(username);

    if let Err(e) = config::save_config(&app.config) {
        app.last_error = Some(format!("Failed to save configuration: {e}"));
    }

    app.library.clear();
    app.collection_view.set_records(vec![]);
    app.randomizer_view.reset();

    request_library_load(app)?;

    Ok(())
}

/// Dispatches a library fetch for the resolved username, or prompts for one
/// when no username is configured anywhere.
pub(crate) fn request_library_load(app: &mut App) -> Result<()> {
    match config::resolve_username(app.session_username.as_deref(), &app.config) {
        Some(username) => {
            app.task_tx.send(AppTask::LoadLibrary { username })?;
        }
        None => {
            app.last_error =
                Some("No Discogs username configured, press 'u' to set one".to_owned());
        }
    }

    Ok(())
}

/// Reports a background failure in the footer. A failed spin also has to
/// terminate the spinning animation, otherwise the view would cycle covers
/// forever waiting for a pick that never arrives.
pub(super) fn handle_error(app: &mut App, message: String) {
    app.randomizer_view.cancel_spin();
    app.last_error = Some(message);
}

pub(super) fn handle_tick(app: &mut App) {
    app.randomizer_view.advance_animation();
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::components::randomizer::SpinPhase;
    use crate::config::AppConfig;

    fn app() -> App {
        let (task_tx, _task_rx) = mpsc::channel();
        App::new(AppConfig::default(), task_tx)
    }

    fn entry(id: u64) -> CatalogEntry {
        CatalogEntry {
            id,
            title: format!("Record {id}"),
            artists: vec![],
            cover_image: None,
            year: None,
        }
    }

    #[test]
    fn stale_empty_collection_result_is_discarded() {
        let mut app = app();
        app.spin_generation = 2;
        handle_record_picked(&mut app, 2, entry(1));

        handle_nothing_to_spin(&mut app, 1);

        assert!(matches!(app.randomizer_view.phase, SpinPhase::Presented(_)));
        assert!(app.last_error.is_none());
    }

    #[test]
    fn current_empty_collection_result_resets_the_view() {
        let mut app = app();
        app.spin_generation = 1;
        app.randomizer_view.begin_spin(vec![]);

        handle_nothing_to_spin(&mut app, 1);

        assert!(matches!(app.randomizer_view.phase, SpinPhase::Idle));
        assert!(app.last_error.is_some());
    }

    #[test]
    fn a_failed_spin_terminates_the_spinning_animation() {
        let mut app = app();
        app.spin_generation = 1;
        app.randomizer_view.begin_spin(vec![entry(1)]);

        handle_error(&mut app, "Discogs returned status 500".to_owned());

        assert!(matches!(app.randomizer_view.phase, SpinPhase::Idle));
        assert_eq!(
            app.last_error.as_deref(),
            Some("Discogs returned status 500")
        );
    }

    #[test]
    fn an_unrelated_error_leaves_a_presented_record_in_place() {
        let mut app = app();
        app.spin_generation = 1;
        handle_record_picked(&mut app, 1, entry(1));

        handle_error(&mut app, "Failed to reload the collection".to_owned());

        assert!(matches!(app.randomizer_view.phase, SpinPhase::Presented(_)));
        assert!(app.last_error.is_some());
    }
}
