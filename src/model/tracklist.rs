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

//! Tracklist normalisation and side partitioning.
//!
//! The metadata source returns a release's tracklist in an irregular shape:
//! a sequence of track objects, a single bare object for one-track releases,
//! or nothing at all, and individual tracks may lack a name or a rank. This
//! module normalises any of those shapes into a consistent ordered list and
//! splits it into the two sides of a record.

use serde::Deserialize;
use serde_json::Value;

/// One song on a release, normalised for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Track {
    /// Display-facing rank label. A string so non-numeric ranks survive.
    pub(crate) position: String,
    pub(crate) title: String,
}

/// A tracklist split into the two sides of a record.
///
/// Side A holds `ceil(n / 2)` tracks and side B the remaining
/// `floor(n / 2)`; concatenating them reproduces the normalised order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SplitTracklist {
    pub(crate) side_a: Vec<Track>,
    pub(crate) side_b: Vec<Track>,
}

/// The raw `tracks.track` payload as the metadata source serialises it.
///
/// The API drops the enclosing array when a release has a single track, so
/// both shapes are modelled explicitly at the deserialisation boundary and
/// normalised immediately on ingestion.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawTracklist {
    Many(Vec<RawTrack>),
    One(Box<RawTrack>),
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawTrack {
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(rename = "@attr", default)]
    pub(crate) attr: Option<TrackAttr>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TrackAttr {
    #[serde(default)]
    pub(crate) rank: Option<Value>,
}

impl TrackAttr {
    /// The rank rendered as a display string. The API serialises ranks as
    /// numbers, but strings are accepted too.
    fn rank_string(&self) -> Option<String> {
        match self.rank.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Normalises a raw tracklist payload and splits it into side A and side B.
///
/// An absent or malformed payload degrades to two empty sides rather than an
/// error, so the caller always has something to render.
pub(crate) fn partition(raw: Option<RawTracklist>) -> SplitTracklist {
    let raw_tracks = match raw {
        None => vec![],
        Some(RawTracklist::One(track)) => vec![*track],
        Some(RawTracklist::Many(tracks)) => tracks,
    };

    let mut tracks: Vec<Track> = raw_tracks
        .into_iter()
        .enumerate()
        .map(|(index, raw)| normalize_track(index, raw))
        .filter(|track| !track.title.is_empty())
        .collect();

    let half = tracks.len().div_ceil(2);
    let side_b = tracks.split_off(half);

    SplitTracklist { side_a: tracks, side_b }
}

/// Fills in the missing fields of a raw track.
///
/// A blank or absent name becomes `"Track {n}"` and an absent rank becomes
/// the 1-based position in the normalised sequence.
fn normalize_track(index: usize, raw: RawTrack) -> Track {
    let title = raw
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| format!("Track {}", index + 1));

    let position = raw
        .attr
        .as_ref()
        .and_then(TrackAttr::rank_string)
        .unwrap_or_else(|| (index + 1).to_string());

    Track { position, title }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(position: &str, title: &str) -> Track {
        Track {
            position: position.into(),
            title: title.into(),
        }
    }

    fn raw(json: &str) -> RawTracklist {
        serde_json::from_str(json).expect("raw tracklist should deserialise")
    }

    #[test]
    fn splits_sides_and_preserves_order() {
        let split = partition(Some(raw(
            r#"[
                {"name": "A", "@attr": {"rank": 1}},
                {"name": "B", "@attr": {"rank": 2}},
                {"name": "C", "@attr": {"rank": 3}},
                {"name": "D", "@attr": {"rank": 4}},
                {"name": "E", "@attr": {"rank": 5}}
            ]"#,
        )));

        assert_eq!(
            split.side_a,
            vec![track("1", "A"), track("2", "B"), track("3", "C")]
        );
        assert_eq!(split.side_b, vec![track("4", "D"), track("5", "E")]);
    }

    #[test]
    fn odd_split_example() {
        let split = partition(Some(raw(
            r#"[{"name": "A"}, {"name": "B"}, {"name": "C"}]"#,
        )));

        assert_eq!(split.side_a, vec![track("1", "A"), track("2", "B")]);
        assert_eq!(split.side_b, vec![track("3", "C")]);
    }

    #[test]
    fn single_object_behaves_like_a_one_element_sequence() {
        let bare = partition(Some(raw(r#"{"name": "Only Cut"}"#)));
        let wrapped = partition(Some(raw(r#"[{"name": "Only Cut"}]"#)));

        assert_eq!(bare, wrapped);
        assert_eq!(bare.side_a, vec![track("1", "Only Cut")]);
        assert!(bare.side_b.is_empty());
    }

    #[test]
    fn absent_payload_yields_empty_sides() {
        let split = partition(None);

        assert!(split.side_a.is_empty());
        assert!(split.side_b.is_empty());
    }

    #[test]
    fn missing_name_is_substituted_by_position() {
        let split = partition(Some(raw(
            r#"[{"name": "First"}, {"@attr": {"rank": 2}}, {"name": "   "}]"#,
        )));

        assert_eq!(split.side_a, vec![track("1", "First"), track("2", "Track 2")]);
        assert_eq!(split.side_b, vec![track("3", "Track 3")]);
    }

    #[test]
    fn missing_rank_is_substituted_by_position() {
        let split = partition(Some(raw(r#"[{"name": "A"}, {"name": "B"}]"#)));

        assert_eq!(split.side_a, vec![track("1", "A")]);
        assert_eq!(split.side_b, vec![track("2", "B")]);
    }

    #[test]
    fn non_numeric_ranks_survive_as_strings() {
        let split = partition(Some(raw(
            r#"[{"name": "A", "@attr": {"rank": "A1"}}, {"name": "B", "@attr": {"rank": "A2"}}]"#,
        )));

        assert_eq!(split.side_a, vec![track("A1", "A")]);
        assert_eq!(split.side_b, vec![track("A2", "B")]);
    }

    #[test]
    fn titles_are_trimmed() {
        let split = partition(Some(raw(r#"[{"name": "  Blue in Green  "}]"#)));

        assert_eq!(split.side_a, vec![track("1", "Blue in Green")]);
    }

    #[test]
    fn split_sizes_hold_for_a_range_of_lengths() {
        for n in 0..12usize {
            let tracks: Vec<RawTrack> = (0..n)
                .map(|i| RawTrack {
                    name: Some(format!("T{i}")),
                    attr: None,
                })
                .collect();

            let split = partition(Some(RawTracklist::Many(tracks)));

            assert_eq!(split.side_a.len(), n.div_ceil(2));
            assert_eq!(split.side_b.len(), n / 2);

            let rejoined: Vec<String> = split
                .side_a
                .iter()
                .chain(split.side_b.iter())
                .map(|t| t.title.clone())
                .collect();
            let expected: Vec<String> = (0..n).map(|i| format!("T{i}")).collect();
            assert_eq!(rejoined, expected);
        }
    }
}
