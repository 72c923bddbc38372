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

use crate::model::tracklist::Track;

/// Formats a release year for display, substituting a placeholder when the
/// catalog source did not know it.
pub(crate) fn format_year(year: Option<u32>) -> String {
    match year {
        Some(year) => year.to_string(),
        None => "Unknown Year".to_owned(),
    }
}

/// Formats a single tracklist line as `position. title`.
pub(crate) fn format_track(track: &Track) -> String {
    format!("{}. {}", track.position, track.title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_year() {
        assert_eq!(format_year(Some(1977)), "1977");
    }

    #[test]
    fn unknown_year() {
        assert_eq!(format_year(None), "Unknown Year");
    }

    #[test]
    fn track_line() {
        let track = Track {
            position: "A1".into(),
            title: "Speak to Me".into(),
        };

        assert_eq!(format_track(&track), "A1. Speak to Me");
    }
}
