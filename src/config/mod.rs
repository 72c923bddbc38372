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

//! Application configuration.
//!
//! This module manages the application configuration file and the resolution
//! of the catalog and metadata source credentials. Each credential is looked
//! up in a fixed precedence order: a session override (the username edited in
//! the UI), then the stored configuration value, then an environment
//! variable.

use std::env;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "platter";

pub(crate) const USERNAME_ENV: &str = "DISCOGS_USERNAME";
pub(crate) const TOKEN_ENV: &str = "DISCOGS_TOKEN";
pub(crate) const LASTFM_KEY_ENV: &str = "LASTFM_API_KEY";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,
    pub discogs_username: Option<String>,
    pub discogs_token: Option<String>,
    pub lastfm_api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            discogs_username: None,
            discogs_token: None,
            lastfm_api_key: None,
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}

/// Resolves the catalog source username, preferring a session override set
/// through the UI over the stored configuration, and the configuration over
/// the `DISCOGS_USERNAME` environment variable.
pub(crate) fn resolve_username(session: Option<&str>, cfg: &AppConfig) -> Option<String> {
    resolve_setting(
        session,
        cfg.discogs_username.as_deref(),
        env_var(USERNAME_ENV).as_deref(),
    )
}

/// Resolves the catalog source access token from the configuration or the
/// `DISCOGS_TOKEN` environment variable.
pub(crate) fn resolve_discogs_token(cfg: &AppConfig) -> Option<String> {
    resolve_setting(None, cfg.discogs_token.as_deref(), env_var(TOKEN_ENV).as_deref())
}

/// Resolves the metadata source API key from the configuration or the
/// `LASTFM_API_KEY` environment variable.
pub(crate) fn resolve_lastfm_key(cfg: &AppConfig) -> Option<String> {
    resolve_setting(
        None,
        cfg.lastfm_api_key.as_deref(),
        env_var(LASTFM_KEY_ENV).as_deref(),
    )
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// Returns the first non-blank candidate, trimmed. Blank strings count as
/// unset so an empty config entry does not shadow an environment variable.
fn resolve_setting(
    session: Option<&str>,
    stored: Option<&str>,
    env: Option<&str>,
) -> Option<String> {
    [session, stored, env]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_override_wins() {
        let resolved = resolve_setting(Some("edited"), Some("stored"), Some("env"));

        assert_eq!(resolved.as_deref(), Some("edited"));
    }

    #[test]
    fn stored_value_beats_environment() {
        let resolved = resolve_setting(None, Some("stored"), Some("env"));

        assert_eq!(resolved.as_deref(), Some("stored"));
    }

    #[test]
    fn environment_is_the_last_resort() {
        let resolved = resolve_setting(None, None, Some("env"));

        assert_eq!(resolved.as_deref(), Some("env"));
    }

    #[test]
    fn blank_candidates_are_skipped() {
        let resolved = resolve_setting(Some("   "), Some(""), Some("env"));

        assert_eq!(resolved.as_deref(), Some("env"));
    }

    #[test]
    fn values_are_trimmed() {
        let resolved = resolve_setting(Some("  husain  "), None, None);

        assert_eq!(resolved.as_deref(), Some("husain"));
    }

    #[test]
    fn nothing_set_resolves_to_none() {
        assert_eq!(resolve_setting(None, None, None), None);
    }
}
