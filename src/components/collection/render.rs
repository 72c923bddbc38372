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

//! UI rendering logic for the collection browser.
//!
//! This module handles the visual representation of the record library,
//! including column layout, selection highlighting, and theme application
//! using the Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{components::CollectionView, render::Render, theme::Theme, util::format};

impl Render for CollectionView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .padding(Padding::horizontal(1));

        let header = Paragraph::new(format!("Collection | {} records", self.records.len()))
            .block(header_block);
        f.render_widget(header, chunks[0]);

        self.draw_table(f, chunks[1], theme);
    }
}

impl CollectionView {
    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.records.iter().map(|record| {
            let year = format::format_year(record.year);

            Row::new(vec![
                Cell::from(
                    Line::from(record.title.as_str()).style(Style::default().fg(theme.title_fg)),
                ),
                Cell::from(
                    Line::from(record.primary_artist().to_owned())
                        .style(Style::default().fg(theme.artist_fg)),
                ),
                Cell::from(
                    Line::from(year)
                        .style(Style::default().fg(theme.year_fg))
                        .alignment(Alignment::Right),
                ),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(45),
                Constraint::Percentage(45),
                Constraint::Length(6),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from("Title"),
                Cell::from("Artist"),
                Cell::from(Line::from("Year").alignment(Alignment::Right)),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .block(Block::default());

        let state = &mut self.table_state;
        f.render_stateful_widget(table, area, state);
    }
}
