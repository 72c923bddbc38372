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

//! Render the status footer.
//!
//! The footer shows the last error when there is one, otherwise a short
//! reminder of the key bindings. Errors here are always retryable; a new
//! spin or reload clears them.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::App;

const KEYMAP_HINT: &str = "s spin | f flip | p play | u username | 1/2 view | r reload | q quit";

pub(super) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let (text, colour) = match &app.last_error {
        Some(message) => (message.as_str(), app.theme.error_colour),
        None => (KEYMAP_HINT, app.theme.hint_colour),
    };

    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(colour)),
        container[0],
    );
}
