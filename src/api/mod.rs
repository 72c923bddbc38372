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

//! Clients for the external catalog and metadata sources.
//!
//! Both clients are thin blocking wrappers around HTTP JSON endpoints,
//! intended to be called from the background task worker rather than the UI
//! thread.
//!
//! # Sub-modules
//!
//! * [`discogs`]: The catalog source, supplying the user's record
//!   collection.
//! * [`lastfm`]: The metadata source, supplying per-release tracklists.

pub(crate) mod discogs;
pub(crate) mod lastfm;

use std::time::Duration;

use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("{0} is not configured")]
    MissingCredential(&'static str),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{service} returned status {status}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
    },
}

/// Builds the shared blocking HTTP client used by both API clients.
///
/// The catalog source rejects requests without an identifying user agent, so
/// one is always set.
pub(crate) fn http_client() -> Result<reqwest::blocking::Client, ApiError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(concat!("platter/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}
