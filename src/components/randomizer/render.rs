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

//! UI rendering logic for the randomizer view.
//!
//! The picked record is drawn as a framed card with a small stack of
//! backdrop cards behind it. Flipping the card swaps the cover face for the
//! Side A / Side B tracklist, mirroring the two faces of a record sleeve.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::{
    components::randomizer::{PresentedRecord, RandomizerView, SpinPhase},
    model::{CatalogEntry, tracklist::Track},
    render::Render,
    theme::Theme,
    util::format,
};

// Frames of the spinning-record glyph, advanced once per tick.
const VINYL_FRAMES: [&str; 4] = ["\u{25D0}", "\u{25D3}", "\u{25D1}", "\u{25D2}"];

const CARD_WIDTH: u16 = 46;
const CARD_HEIGHT: u16 = 16;

// Offset between successive backdrop cards in the stack.
const STACK_STEP_X: u16 = 3;
const STACK_STEP_Y: u16 = 1;

impl Render for RandomizerView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        match &self.phase {
            SpinPhase::Idle => draw_idle(f, area, theme),
            SpinPhase::Spinning { covers, frame } => draw_spinning(f, area, covers, *frame, theme),
            SpinPhase::Presented(record) => draw_record(f, area, record, theme),
        }
    }
}

fn draw_idle(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(""),
        Line::from("No record on the platter").bold(),
        Line::from(""),
        Line::from("Press 's' to spin a random record from your collection")
            .style(Style::default().fg(theme.hint_colour)),
    ];

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered_rect(area, CARD_WIDTH + 14, 6),
    );
}

/// Cycles through the decorative cover sample while the primary pick is in
/// flight, one cover per animation frame.
fn draw_spinning(f: &mut Frame, area: Rect, covers: &[CatalogEntry], frame: usize, theme: &Theme) {
    let card = centered_rect(area, CARD_WIDTH, CARD_HEIGHT);

    if covers.is_empty() {
        f.render_widget(
            Paragraph::new("Searching...").alignment(Alignment::Center),
            card,
        );
        return;
    }

    let cover = &covers[frame % covers.len()];
    draw_cover_card(f, card, cover, theme, false);

    let caption = Rect {
        y: card.y.saturating_add(card.height),
        height: 1,
        ..card
    };
    f.render_widget(
        Paragraph::new("Searching...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.hint_colour)),
        caption.intersection(area),
    );
}

fn draw_record(f: &mut Frame, area: Rect, record: &PresentedRecord, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(area);

    let card = centered_rect(chunks[0], CARD_WIDTH, CARD_HEIGHT);

    draw_backdrop_stack(f, chunks[0], card, &record.backdrop, theme);

    if record.flipped {
        draw_tracklist_face(f, card, record, theme);
    } else {
        draw_cover_card(f, card, &record.entry, theme, record.playing);
    }

    draw_details(f, chunks[1], record, theme);
}

/// Draws the decorative stack of sampled covers behind the main card, back
/// to front so the main card overdraws them.
fn draw_backdrop_stack(
    f: &mut Frame,
    area: Rect,
    card: Rect,
    backdrop: &[CatalogEntry],
    theme: &Theme,
) {
    for (i, _) in backdrop.iter().enumerate().rev() {
        let step = (i + 1) as u16;
        let offset = Rect {
            x: card.x.saturating_add(STACK_STEP_X * step),
            y: card.y.saturating_sub(STACK_STEP_Y * step),
            ..card
        }
        .intersection(area);

        if offset.is_empty() {
            continue;
        }

        f.render_widget(Clear, offset);
        f.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.backdrop_fg)),
            offset,
        );
    }
}

/// The front face of the card: the cover placeholder with the release title
/// and, while "playing", the spinning record glyph.
fn draw_cover_card(f: &mut Frame, card: Rect, entry: &CatalogEntry, theme: &Theme, playing: bool) {
    f.render_widget(Clear, card);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_colour))
        .padding(Padding::uniform(1));

    let vinyl = if playing {
        VINYL_FRAMES[0]
    } else {
        "\u{25CF}"
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(vinyl).style(Style::default().fg(theme.accent_colour)),
        Line::from(""),
        Line::from(entry.title.as_str())
            .bold()
            .style(Style::default().fg(theme.title_fg)),
        Line::from(entry.primary_artist().to_owned())
            .style(Style::default().fg(theme.artist_fg)),
        Line::from(format::format_year(entry.year)).style(Style::default().fg(theme.year_fg)),
    ];

    if let Some(url) = entry.cover_image.as_deref() {
        lines.push(Line::from(""));
        lines.push(Line::from(url.to_owned()).style(Style::default().fg(theme.hint_colour)));
    }

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        card,
    );
}

/// The back face of the card: the partitioned tracklist, one column per
/// side.
fn draw_tracklist_face(f: &mut Frame, card: Rect, record: &PresentedRecord, theme: &Theme) {
    f.render_widget(Clear, card);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_colour))
        .title(" Track List ")
        .title_alignment(Alignment::Center);

    let inner = block.inner(card);
    f.render_widget(block, card);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .horizontal_margin(1)
        .split(inner);

    let (side_a, side_b) = match &record.tracklist {
        Some(split) => (split.side_a.as_slice(), split.side_b.as_slice()),
        None => (&[][..], &[][..]),
    };

    f.render_widget(side_paragraph("Side A", side_a, theme), columns[0]);
    f.render_widget(side_paragraph("Side B", side_b, theme), columns[1]);
}

fn side_paragraph<'a>(label: &'a str, tracks: &'a [Track], theme: &Theme) -> Paragraph<'a> {
    let mut lines = vec![
        Line::from(label)
            .bold()
            .style(Style::default().fg(theme.side_label_fg)),
    ];

    if tracks.is_empty() {
        lines.push(Line::from("No tracks available").style(Style::default().fg(theme.hint_colour)));
    } else {
        for track in tracks {
            lines.push(
                Line::from(format::format_track(track))
                    .style(Style::default().fg(theme.track_title_fg)),
            );
        }
    }

    Paragraph::new(lines)
}

fn draw_details(f: &mut Frame, area: Rect, record: &PresentedRecord, theme: &Theme) {
    let vinyl = VINYL_FRAMES[record.frame % VINYL_FRAMES.len()];
    let status = if record.playing {
        format!("{vinyl} Now spinning")
    } else if record.flipped {
        "'f' flips back to the cover".to_owned()
    } else {
        "'f' flips the sleeve, 'p' drops the needle".to_owned()
    };

    let lines = vec![
        Line::from(record.entry.title.clone())
            .bold()
            .style(Style::default().fg(theme.title_fg)),
        Line::from(format!(
            "{} ({})",
            record.entry.primary_artist(),
            format::format_year(record.entry.year)
        ))
        .style(Style::default().fg(theme.artist_fg)),
        Line::from(status).style(Style::default().fg(theme.hint_colour)),
    ];

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

/// Centers a `width` x `height` rectangle inside `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
