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

//! Metadata source client for the Last.fm album API.
//!
//! Looks up a release's tracklist by (artist name, release title). The
//! match is loose: the catalog entry and the metadata record come from
//! different services, so a lookup miss is an ordinary outcome and is
//! reported as `None` rather than an error. The raw payload is returned
//! untouched; normalisation lives in [`crate::model::tracklist`].

use serde::Deserialize;

use crate::{api::ApiError, model::tracklist::RawTracklist};

const LASTFM_API_URL: &str = "https://ws.audioscrobbler.com/2.0/";

pub(crate) struct LastFmClient {
    http: reqwest::blocking::Client,
    api_key: String,
}

impl LastFmClient {
    pub(crate) fn new(http: reqwest::blocking::Client, api_key: String) -> Self {
        Self { http, api_key }
    }

    /// Fetches the raw tracklist payload for a release.
    ///
    /// Last.fm reports lookup failures (unknown album, bad parameters) in
    /// the response body with a `200` status; those land in the `None` arm
    /// because the `album` object is absent.
    pub(crate) fn fetch_tracklist(
        &self,
        artist: &str,
        album: &str,
    ) -> Result<Option<RawTracklist>, ApiError> {
        let response = self
            .http
            .get(LASTFM_API_URL)
            .query(&[
                ("method", "album.getinfo"),
                ("api_key", self.api_key.as_str()),
                ("artist", artist),
                ("album", album),
                ("format", "json"),
            ])
            .send()?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                service: "Last.fm",
                status: response.status(),
            });
        }

        let body: AlbumInfoResponse = response.json()?;

        Ok(body
            .album
            .and_then(|album| album.tracks)
            .and_then(|tracks| tracks.track))
    }
}

#[derive(Debug, Deserialize)]
struct AlbumInfoResponse {
    #[serde(default)]
    album: Option<AlbumInfo>,
}

#[derive(Debug, Deserialize)]
struct AlbumInfo {
    #[serde(default)]
    tracks: Option<AlbumTracks>,
}

#[derive(Debug, Deserialize)]
struct AlbumTracks {
    #[serde(default)]
    track: Option<RawTracklist>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tracklist::partition;

    fn payload(json: &str) -> Option<RawTracklist> {
        let body: AlbumInfoResponse =
            serde_json::from_str(json).expect("album info should deserialise");

        body.album
            .and_then(|album| album.tracks)
            .and_then(|tracks| tracks.track)
    }

    #[test]
    fn extracts_a_track_sequence() {
        let raw = payload(
            r#"{
                "album": {
                    "name": "Kind of Blue",
                    "artist": "Miles Davis",
                    "tracks": {
                        "track": [
                            {"name": "So What", "duration": 562, "@attr": {"rank": 1}},
                            {"name": "Freddie Freeloader", "duration": 589, "@attr": {"rank": 2}},
                            {"name": "Blue in Green", "duration": 327, "@attr": {"rank": 3}}
                        ]
                    }
                }
            }"#,
        );

        let split = partition(raw);

        assert_eq!(split.side_a.len(), 2);
        assert_eq!(split.side_b.len(), 1);
        assert_eq!(split.side_a[0].title, "So What");
        assert_eq!(split.side_a[0].position, "1");
    }

    #[test]
    fn extracts_a_single_track_object() {
        let raw = payload(
            r#"{
                "album": {
                    "name": "Single",
                    "tracks": {"track": {"name": "Only Cut", "@attr": {"rank": 1}}}
                }
            }"#,
        );

        let split = partition(raw);

        assert_eq!(split.side_a.len(), 1);
        assert!(split.side_b.is_empty());
    }

    #[test]
    fn albums_without_tracks_yield_none() {
        assert!(payload(r#"{"album": {"name": "No Tracks"}}"#).is_none());
        assert!(payload(r#"{"album": {"name": "Empty", "tracks": {}}}"#).is_none());
    }

    #[test]
    fn api_error_body_yields_none() {
        // Last.fm reports errors with a 200 status and an error body.
        assert!(payload(r#"{"error": 6, "message": "Album not found"}"#).is_none());
    }
}
