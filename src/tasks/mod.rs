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

//! Background application task processing.
//!
//! Handing a URL to the system browser can block for a noticeable time, so
//! it runs on a dedicated worker thread. The worker translates [`AppTask`]
//! requests into the blocking call and reports the outcome back to the
//! application via [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of
//! time, should be implemented as tasks. Everything else is an event.

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::{events::AppEvent, model::StreamingLink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AppTask {
    OpenLink(StreamingLink),
}

/// Something that can hand a URL to the outside world.
pub(crate) trait LinkOpener: Send + 'static {
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens links in the system's default browser.
pub(crate) struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        open::that_detached(url).with_context(|| format!("Failed to open {}", url))
    }
}

/// Spawns a background thread to process application tasks.
///
/// The worker exits when every task sender has been dropped.
///
/// # Arguments
///
/// * `opener` - What to open links with.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    opener: impl LinkOpener,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            if let Err(e) = handle_task(task, &opener, &event_tx) {
                warn!(error = %e, "task failed");
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    })
}

fn handle_task(task: AppTask, opener: &impl LinkOpener, event_tx: &Sender<AppEvent>) -> Result<()> {
    match task {
        AppTask::OpenLink(link) => open_link(link, opener, event_tx),
    }
}

fn open_link(link: StreamingLink, opener: &impl LinkOpener, event_tx: &Sender<AppEvent>) -> Result<()> {
    info!(name = %link.name, url = %link.url, "opening streaming link");
    opener.open(&link.url)?;
    event_tx.send(AppEvent::LinkOpened(link.name))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex, mpsc};

    use anyhow::bail;

    use super::*;

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<String>>>);

    impl LinkOpener for Recorder {
        fn open(&self, url: &str) -> Result<()> {
            if url.is_empty() {
                bail!("empty url");
            }
            if let Ok(mut opened) = self.0.lock() {
                opened.push(url.to_string());
            }
            Ok(())
        }
    }

    fn link(url: &str) -> StreamingLink {
        StreamingLink {
            name: "Spotify".to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_open_link_reports_back() {
        let recorder = Recorder::default();
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let worker = spawn_task_worker(recorder.clone(), task_rx, event_tx);
        task_tx.send(AppTask::OpenLink(link("https://open.spotify.com"))).unwrap();
        task_tx.send(AppTask::OpenLink(link(""))).unwrap();
        drop(task_tx);
        worker.join().unwrap();

        let events: Vec<AppEvent> = event_rx.try_iter().collect();
        assert_eq!(events[0], AppEvent::LinkOpened("Spotify".to_string()));
        assert!(matches!(events[1], AppEvent::Error(_)));
        assert_eq!(*recorder.0.lock().unwrap(), vec!["https://open.spotify.com".to_string()]);
    }
}
