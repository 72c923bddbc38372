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

//! Username editing logic and state management.
//!
//! This module implements the header's inline editor for the catalog source
//! username, handling a text input component and dispatching an application
//! event when editing is finished and a new username is submitted.

mod render;

pub(crate) use render::draw_header;

use std::sync::mpsc::Sender;

use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::events::AppEvent;

pub(crate) struct UsernameEditor {
    active: bool,
    pub(crate) input: Input,
}

impl UsernameEditor {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Enters edit mode with the current username preloaded for editing.
    pub(crate) fn activate(&mut self, current: &str) {
        self.input = Input::new(current.to_owned());
        self.active = true;
    }

    /// Processes a terminal event while the editor is active.
    ///
    /// Returns `true` when the event was consumed. Submitting a non-blank
    /// value dispatches [`AppEvent::UsernameSubmitted`]; escape cancels the
    /// edit and leaves the previous username in effect.
    pub(crate) fn handle_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> bool {
        if !self.active {
            return false;
        }

        let Event::Key(key_event) = event else {
            return false;
        };

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let username = self.input.value().trim().to_owned();
                if !username.is_empty() {
                    let _ = event_tx.send(AppEvent::UsernameSubmitted(username));
                    self.active = false;
                    self.input.reset();
                }
            }

            _ => {
                // Delegate all other key events to the managed input
                // component.
                self.input.handle_event(&Event::Key(key_event));
            }
        }

        true
    }
}
