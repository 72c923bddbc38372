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

//! Random sampling of the record collection.
//!
//! This module provides the selection logic behind the decorative parts of
//! the randomizer view: the covers cycled during the spin animation and the
//! backdrop stack shown behind the picked record.

use rand::{rng, seq::SliceRandom};

use crate::model::{CatalogEntry, ReleaseId};

/// Draws up to `count` entries from `library` uniformly at random, without
/// replacement.
///
/// Entries matching `exclude_id` are never drawn. When `count` exceeds the
/// number of eligible entries the whole eligible set is returned, so the
/// result length is always `min(count, eligible)`. An empty library or a
/// count of zero yields an empty result.
///
/// The input is not mutated; the result is a fresh allocation.
pub(crate) fn sample(
    library: &[CatalogEntry],
    count: usize,
    exclude_id: Option<ReleaseId>,
) -> Vec<CatalogEntry> {
    let mut eligible: Vec<CatalogEntry> = library
        .iter()
        .filter(|entry| exclude_id != Some(entry.id))
        .cloned()
        .collect();

    let mut rng = rng();
    eligible.shuffle(&mut rng);
    eligible.truncate(count);

    eligible
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::model::ReleaseId;

    fn library(ids: &[ReleaseId]) -> Vec<CatalogEntry> {
        ids.iter()
            .map(|&id| CatalogEntry {
                id,
                title: format!("Record {id}"),
                artists: vec![],
                cover_image: None,
                year: None,
            })
            .collect()
    }

    fn ids(entries: &[CatalogEntry]) -> HashSet<ReleaseId> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn draws_distinct_entries_from_the_library() {
        let library = library(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

        for _ in 0..50 {
            let picked = sample(&library, 4, None);

            assert_eq!(picked.len(), 4);
            assert_eq!(ids(&picked).len(), 4, "no id may repeat");
            assert!(ids(&picked).is_subset(&ids(&library)));
        }
    }

    #[test]
    fn clamps_to_the_library_size() {
        let library = library(&[1, 2, 3]);

        let picked = sample(&library, 100, None);

        assert_eq!(ids(&picked), ids(&library));
    }

    #[test]
    fn clamps_to_the_eligible_size_with_exclusion() {
        let library = library(&[1, 2, 3]);

        let picked = sample(&library, 100, Some(2));

        assert_eq!(ids(&picked), HashSet::from([1, 3]));
    }

    #[test]
    fn never_draws_the_excluded_entry() {
        let library = library(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

        for _ in 0..50 {
            let picked = sample(&library, 3, Some(5));

            assert_eq!(picked.len(), 3);
            assert!(!ids(&picked).contains(&5));
        }
    }

    #[test]
    fn empty_library_yields_empty_result() {
        assert!(sample(&[], 0, None).is_empty());
        assert!(sample(&[], 7, None).is_empty());
    }

    #[test]
    fn zero_count_yields_empty_result() {
        let library = library(&[1, 2, 3]);

        assert!(sample(&library, 0, None).is_empty());
    }

    #[test]
    fn does_not_mutate_the_library() {
        let library = library(&[1, 2, 3, 4]);
        let before = library.clone();

        let _ = sample(&library, 2, Some(1));

        assert_eq!(library, before);
    }
}
