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

//! Render the application header.
//!
//! This module renders the title line, or the inline username editor with
//! its text and cursor when editing is in progress.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{App, MainView};

pub(crate) fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let block = Block::default().borders(Borders::BOTTOM).padding(Padding::ZERO);

    if app.username_editor.active() {
        let prompt = "Discogs username: ";
        let editor = &app.username_editor;

        f.render_widget(
            Paragraph::new(format!("{prompt}{}", editor.input.value()))
                .style(Style::default().fg(app.theme.accent_colour))
                .block(block),
            container[0],
        );

        let cursor_x =
            container[0].x + (prompt.chars().count() + editor.input.cursor()) as u16;
        let cursor_y = container[0].y;
        f.set_cursor_position((cursor_x, cursor_y));
        return;
    }

    let mode = match app.main_view {
        MainView::Randomizer => "Randomizer",
        MainView::Collection => "Collection",
    };

    let title = match app.display_username() {
        Some(username) => format!("{username}'s Vinyl {mode}"),
        None => format!("Vinyl {mode}"),
    };

    let line = Line::from(title)
        .bold()
        .style(Style::default().fg(app.theme.accent_colour));

    f.render_widget(Paragraph::new(line).block(block), container[0]);
}
