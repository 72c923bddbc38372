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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking work
//! from the main UI thread. The worker thread owns the two HTTP clients and
//! translates [`AppTask`] requests into catalog and metadata fetches,
//! broadcasting the results back to the application via [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of
//! time to process, should be implemented as tasks. Everything here hits the
//! network.

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{
    api::{self, ApiError, discogs::DiscogsClient, lastfm::LastFmClient},
    config::{self, AppConfig},
    events::AppEvent,
};

#[derive(Debug)]
pub(crate) enum AppTask {
    /// Fetch the user's full record collection. The username is injected at
    /// call time so a session override takes effect immediately.
    LoadLibrary { username: String },

    /// Pick a random record and fetch its tracklist. The generation lets
    /// the event loop discard results of superseded spins.
    SpinRecord { generation: u64, username: String },
}

/// Spawns a background thread to process application tasks.
///
/// This worker thread initialises its own HTTP clients and enters a blocking
/// loop, listening for incoming [`AppTask`]s. Missing credentials are fatal:
/// without them no task can ever succeed, so the worker reports once and
/// exits.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let ctx = match TaskContext::new(&config, &event_tx) {
            Ok(ctx) => ctx,
            Err(e) => {
                let _ = event_tx.send(AppEvent::FatalError(e.to_string()));
                return;
            }
        };

        while let Ok(task) = task_rx.recv() {
            if let Err(e) = handle_task(task, &ctx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    discogs: DiscogsClient,
    lastfm: LastFmClient,
    event_tx: &'a Sender<AppEvent>,
}

impl<'a> TaskContext<'a> {
    fn new(config: &AppConfig, event_tx: &'a Sender<AppEvent>) -> Result<Self, ApiError> {
        let token = config::resolve_discogs_token(config)
            .ok_or(ApiError::MissingCredential("Discogs token"))?;
        let api_key = config::resolve_lastfm_key(config)
            .ok_or(ApiError::MissingCredential("Last.fm API key"))?;

        let http = api::http_client()?;

        Ok(Self {
            discogs: DiscogsClient::new(http.clone(), token),
            lastfm: LastFmClient::new(http, api_key),
            event_tx,
        })
    }
}

/// Orchestrates the execution of a single task.
///
/// This function implements the logic for each task and sends the result
/// back through the application event channel.
fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::LoadLibrary { username } => load_library(ctx, &username),
        AppTask::SpinRecord { generation, username } => spin_record(ctx, generation, &username),
    }
}

fn load_library(ctx: &TaskContext, username: &str) -> Result<()> {
    let library = ctx.discogs.fetch_library(username)?;
    ctx.event_tx.send(AppEvent::LibraryLoaded(library))?;

    Ok(())
}

fn spin_record(ctx: &TaskContext, generation: u64, username: &str) -> Result<()> {
    let Some(entry) = ctx.discogs.fetch_random_entry(username)? else {
        ctx.event_tx.send(AppEvent::NothingToSpin { generation })?;
        return Ok(());
    };

    ctx.event_tx.send(AppEvent::RecordPicked {
        generation,
        entry: entry.clone(),
    })?;

    // A failed tracklist lookup renders a record with two empty sides, it
    // never replaces the picked record with an error.
    let tracklist = ctx
        .lastfm
        .fetch_tracklist(entry.primary_artist(), &entry.title)
        .unwrap_or(None);

    ctx.event_tx.send(AppEvent::TracklistReady {
        generation,
        tracklist,
    })?;

    Ok(())
}
