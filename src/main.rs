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

//! # Vinyl Randomizer TUI.
//!
//! A terminal-based browser and randomizer for a personal vinyl record
//! collection. The collection comes from the user's Discogs account and the
//! tracklists from Last.fm; a spin picks one record at random, stacks a few
//! sampled covers behind it, and flips over to show the Side A / Side B
//! tracklist.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * A **Background Worker** owns the HTTP clients and handles the network
//!   fetches via asynchronous task processing.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure
//! the terminal state is preserved even in the event of a crash.
//! Communication between the UI and the background worker is handled via
//! `std::sync::mpsc` channels.

mod api;
mod components;
mod config;
mod events;
mod model;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    components::{CollectionView, RandomizerView, UsernameEditor},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::CatalogEntry,
    tasks::AppTask,
    theme::Theme,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum MainView {
    Randomizer,
    Collection,
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub main_view: MainView,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    /// The in-memory record library, refreshed by a library load.
    pub library: Vec<CatalogEntry>,

    /// Monotonically increasing spin counter. Results carrying an older
    /// generation belong to a superseded spin and are discarded.
    pub spin_generation: u64,

    /// Username edited during this session; overrides the stored
    /// configuration until the application exits.
    pub session_username: Option<String>,

    pub username_editor: UsernameEditor,
    pub randomizer_view: RandomizerView,
    pub collection_view: CollectionView,

    pub last_error: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let mut randomizer_view = RandomizerView::new();
        randomizer_view.is_active = true;

        Self {
            config,
            theme: Theme::default(),
            main_view: MainView::Randomizer,
            event_tx,
            event_rx,
            task_tx,
            library: vec![],
            spin_generation: 0,
            session_username: None,
            username_editor: UsernameEditor::new(),
            randomizer_view,
            collection_view: CollectionView::new(),
            last_error: None,
        }
    }

    /// The username shown in the header, resolved with the session override
    /// taking precedence over the stored configuration.
    pub fn display_username(&self) -> Option<String> {
        config::resolve_username(self.session_username.as_deref(), &self.config)
    }
}

/// The entry point of the application.
///
/// Sets up the communication channels, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
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
/// Returns an error if raw mode cannot be enabled or if the alternate
/// screen cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd
    // get a thin black outline
    util::term::set_terminal_bg(app.theme.background_colour);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including
/// disabling raw mode, leaving the alternate screen, and resetting the
/// background color. It also ensures the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a
/// result, as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event
/// loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process the network fetches.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes and drive animation.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an
/// unrecoverable application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    // Spawn a background worker to process application tasks
    // asynchronously.
    let task_event_tx = app.event_tx.clone();
    tasks::spawn_task_worker(&app.config, task_rx, task_event_tx);

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                tx_keys.send(AppEvent::Key(key)).ok();
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI
    // application and the cadence of the spin animation.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let _ = tx_tick.send(AppEvent::Tick);
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Initial trigger to populate the library from the catalog source
    events::request_library_load(app)?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
