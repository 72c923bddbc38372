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

//! Terminal environment and styling utilities.
//!
//! This module sets and restores the terminal emulator's background color
//! using OSC (Operating System Command) escape sequences.
//!
//! # Compatibility
//!
//! These functions rely on the terminal emulator supporting the specific
//! OSC codes. Most modern terminals (XTerm, iTerm2, Alacritty, Kitty)
//! support these sequences.

use std::io::{self, Write};

use ratatui::style::Color;

/// Sets the terminal background color using an OSC 11 escape sequence.
///
/// Only `Rgb` colors can be expressed in the sequence; other variants are
/// ignored.
pub(crate) fn set_terminal_bg(colour: Color) {
    if let Color::Rgb(r, g, b) = colour {
        print!("\x1b]11;#{r:02x}{g:02x}{b:02x}\x07");
        io::stdout().flush().ok();
    }
}

/// Resets the terminal background to its default color.
///
/// This sends the OSC 111 escape sequence, which instructs the terminal to
/// revert the background color to the user's original configuration. Called
/// during application cleanup.
pub(crate) fn reset_terminal_bg() {
    print!("\x1b]111\x07");
    io::stdout().flush().ok();
}
