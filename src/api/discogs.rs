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

//! Catalog source client for the Discogs collection API.
//!
//! Fetches the releases in a user's collection folder and maps each
//! release's `basic_information` object into a [`CatalogEntry`]. The
//! username is injected per call so a session override takes effect without
//! rebuilding the client.

use rand::{rng, seq::IndexedRandom};
use serde::Deserialize;

use crate::{
    api::ApiError,
    model::{ArtistCredit, CatalogEntry},
};

const DISCOGS_API_URL: &str = "https://api.discogs.com";

// Folder 0 is the implicit "All" folder of every collection.
const COLLECTION_FOLDER: &str = "0";
const PER_PAGE: &str = "100";

pub(crate) struct DiscogsClient {
    http: reqwest::blocking::Client,
    token: String,
}

impl DiscogsClient {
    pub(crate) fn new(http: reqwest::blocking::Client, token: String) -> Self {
        Self { http, token }
    }

    /// Fetches the user's record collection.
    pub(crate) fn fetch_library(&self, username: &str) -> Result<Vec<CatalogEntry>, ApiError> {
        let releases = self.fetch_collection_page(username)?;

        Ok(releases
            .into_iter()
            .map(CollectionRelease::into_entry)
            .collect())
    }

    /// Fetches the collection and picks one release uniformly at random.
    ///
    /// This is the primary pick of the randomizer. Returns `None` for an
    /// empty collection.
    pub(crate) fn fetch_random_entry(
        &self,
        username: &str,
    ) -> Result<Option<CatalogEntry>, ApiError> {
        let releases = self.fetch_collection_page(username)?;

        let mut rng = rng();
        Ok(releases
            .choose(&mut rng)
            .cloned()
            .map(CollectionRelease::into_entry))
    }

    fn fetch_collection_page(&self, username: &str) -> Result<Vec<CollectionRelease>, ApiError> {
        let url = format!(
            "{DISCOGS_API_URL}/users/{username}/collection/folders/{COLLECTION_FOLDER}/releases"
        );

        let response = self
            .http
            .get(&url)
            .query(&[("per_page", PER_PAGE), ("token", self.token.as_str())])
            .send()?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                service: "Discogs",
                status: response.status(),
            });
        }

        let page: CollectionPage = response.json()?;
        Ok(page.releases)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CollectionPage {
    #[serde(default)]
    releases: Vec<CollectionRelease>,
}

#[derive(Debug, Clone, Deserialize)]
struct CollectionRelease {
    basic_information: BasicInformation,
}

#[derive(Debug, Clone, Deserialize)]
struct BasicInformation {
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    artists: Vec<ReleaseArtist>,
    #[serde(default)]
    cover_image: Option<String>,
    #[serde(default)]
    year: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
struct ReleaseArtist {
    name: String,
}

impl CollectionRelease {
    fn into_entry(self) -> CatalogEntry {
        let info = self.basic_information;

        CatalogEntry {
            id: info.id,
            title: info.title,
            artists: info
                .artists
                .into_iter()
                .map(|artist| ArtistCredit { name: artist.name })
                .collect(),
            cover_image: info.cover_image.filter(|url| !url.is_empty()),
            // Discogs reports an unknown year as zero.
            year: info.year.filter(|&year| year != 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLLECTION_JSON: &str = r#"{
        "pagination": {"page": 1, "pages": 1, "per_page": 100, "items": 2},
        "releases": [
            {
                "id": 1001,
                "instance_id": 1,
                "basic_information": {
                    "id": 1001,
                    "title": "Kind of Blue",
                    "year": 1959,
                    "cover_image": "https://img.discogs.com/kind-of-blue.jpg",
                    "artists": [{"name": "Miles Davis", "id": 23755}]
                }
            },
            {
                "id": 1002,
                "instance_id": 2,
                "basic_information": {
                    "id": 1002,
                    "title": "Untitled Acetate",
                    "year": 0,
                    "cover_image": "",
                    "artists": []
                }
            }
        ]
    }"#;

    fn entries() -> Vec<CatalogEntry> {
        let page: CollectionPage =
            serde_json::from_str(COLLECTION_JSON).expect("collection page should deserialise");

        page.releases
            .into_iter()
            .map(CollectionRelease::into_entry)
            .collect()
    }

    #[test]
    fn maps_basic_information_into_entries() {
        let entries = entries();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, 1001);
        assert_eq!(entries[0].title, "Kind of Blue");
        assert_eq!(entries[0].primary_artist(), "Miles Davis");
        assert_eq!(entries[0].year, Some(1959));
        assert_eq!(
            entries[0].cover_image.as_deref(),
            Some("https://img.discogs.com/kind-of-blue.jpg")
        );
    }

    #[test]
    fn unknown_year_and_blank_cover_become_none() {
        let entries = entries();

        assert_eq!(entries[1].year, None);
        assert_eq!(entries[1].cover_image, None);
        assert_eq!(entries[1].primary_artist(), "Unknown Artist");
    }

    #[test]
    fn missing_releases_field_deserialises_to_an_empty_page() {
        let page: CollectionPage =
            serde_json::from_str(r#"{"pagination": {}}"#).expect("page should deserialise");

        assert!(page.releases.is_empty());
    }
}
