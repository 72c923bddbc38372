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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application—the catalog
//! entries making up the user's record collection, and the tracks that make
//! up a release's tracklist—together with the pure selection and partitioning
//! logic that operates on them.

pub(crate) mod sampler;
pub(crate) mod tracklist;

/// Stable identifier of a release within the catalog source.
pub(crate) type ReleaseId = u64;

pub(crate) const UNKNOWN_ARTIST: &str = "Unknown Artist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ArtistCredit {
    pub(crate) name: String,
}

/// One release in the user's collection.
///
/// Created by deserialising a catalog API response, immutable for the
/// session, and held in an in-memory library. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CatalogEntry {
    pub(crate) id: ReleaseId,
    pub(crate) title: String,
    pub(crate) artists: Vec<ArtistCredit>,
    pub(crate) cover_image: Option<String>,
    pub(crate) year: Option<u32>,
}

impl CatalogEntry {
    /// The first credited artist, or a placeholder when the catalog source
    /// supplied no credits at all.
    pub(crate) fn primary_artist(&self) -> &str {
        self.artists
            .first()
            .map(|a| a.name.as_str())
            .unwrap_or(UNKNOWN_ARTIST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_artist_is_first_credit() {
        let entry = CatalogEntry {
            id: 1,
            title: "Abbey Road".into(),
            artists: vec![
                ArtistCredit { name: "The Beatles".into() },
                ArtistCredit { name: "George Martin".into() },
            ],
            cover_image: None,
            year: Some(1969),
        };

        assert_eq!(entry.primary_artist(), "The Beatles");
    }

    #[test]
    fn primary_artist_falls_back_when_uncredited() {
        let entry = CatalogEntry {
            id: 2,
            title: "White Label Promo".into(),
            artists: vec![],
            cover_image: None,
            year: None,
        };

        assert_eq!(entry.primary_artist(), UNKNOWN_ARTIST);
    }
}
