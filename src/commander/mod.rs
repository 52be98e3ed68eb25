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

//! Command-line input logic and state management.
//!
//! This module implements a command-line component: `:` opens it, typed text
//! goes to a text input, and `Enter` parses the text into an application
//! event and closes the line again. `Esc` closes it without running anything.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use tracing::debug;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{MainView, events::AppEvent, model::SectionKind};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Returns `true` if the event was consumed by the command line.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if key_event.kind != KeyEventKind::Press {
            return self.active;
        }

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.close();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.close();
                if !buffer.is_empty() {
                    let _ = run_command(&buffer, event_tx);
                }
            }

            _ => {
                self.input.handle_event(event);
            }
        }

        true
    }

    fn close(&mut self) {
        self.active = false;
        self.input.reset();
    }
}

fn run_command(buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
    debug!(command = buffer, "running command");

    for event in parse_command(buffer) {
        event_tx.send(event)?;
    }

    Ok(())
}

/// Translates a command line into the events it stands for.
///
/// Anything that cannot be understood becomes a single [`AppEvent::Error`].
pub(crate) fn parse_command(buffer: &str) -> Vec<AppEvent> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    match parts.as_slice() {
        ["q"] | ["quit"] => vec![AppEvent::ExitApplication],

        ["goto", number] => match number.parse::<i64>() {
            // Albums are numbered from one on screen
            Ok(n) => vec![AppEvent::GotoAlbum(n.saturating_sub(1))],
            Err(_) => vec![AppEvent::Error(format!("Not an album number: {}", number))],
        },

        ["section", name] => match SectionKind::parse(name) {
            Some(kind) => vec![AppEvent::GotoSection(kind)],
            None => vec![AppEvent::Error(format!("No such section: {}", name))],
        },

        ["shop"] => vec![AppEvent::SetMainView(MainView::Shop)],
        ["home"] => vec![AppEvent::GotoSection(SectionKind::Intro)],

        ["next"] | ["n"] => vec![AppEvent::NextSlide],
        ["prev"] | ["p"] => vec![AppEvent::PrevSlide],

        [] => vec![],

        [cmd, ..] => vec![AppEvent::Error(format!("Unknown command: {}", cmd))],
    }
}
