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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette, shared by every
//! rendering function so the views stay visually consistent.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,

    pub(crate) title_fg: Color,
    pub(crate) artist_fg: Color,
    pub(crate) year_fg: Color,

    pub(crate) side_label_fg: Color,
    pub(crate) track_title_fg: Color,

    pub(crate) backdrop_fg: Color,
    pub(crate) hint_colour: Color,
    pub(crate) error_colour: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(24, 24, 34),
            accent_colour: Color::Rgb(250, 189, 47),

            title_fg: Color::Rgb(255, 255, 255),
            artist_fg: Color::Rgb(255, 215, 0),
            year_fg: Color::Rgb(162, 161, 166),

            side_label_fg: Color::Rgb(179, 157, 219),
            track_title_fg: Color::Rgb(220, 220, 220),

            backdrop_fg: Color::Rgb(102, 102, 102),
            hint_colour: Color::Rgb(130, 130, 140),
            error_colour: Color::Rgb(230, 90, 90),
        }
    }
}
