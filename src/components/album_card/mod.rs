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

//! Album card with its streaming-link overlay.
//!
//! The card has three visual states. Idle shows the cover and title.
//! Hovering the card adds the "STREAM NOW" overlay. Clicking that button
//! swaps it for the list of streaming links. Leaving the card returns it to
//! idle. The keyboard can drive the same states for terminals without mouse
//! reporting.
//!
//! The state here is per carousel, not per album: moving to another slide
//! resets it.

mod event;
mod render;

pub(crate) use render::AlbumCard;

use ratatui::layout::{Position, Rect};

/// Something the card asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CardAction {
    OpenLink(usize),
}

/// Screen areas of the card, written by the renderer on every frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CardAreas {
    pub(crate) card: Option<Rect>,
    pub(crate) button: Option<Rect>,
    pub(crate) links: Vec<Rect>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct AlbumCardState {
    hovered: bool,
    show_links: bool,
    link_count: usize,
    pub(crate) areas: CardAreas,
}

impl AlbumCardState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub(crate) fn shows_links(&self) -> bool {
        self.show_links
    }

    pub(crate) fn set_link_count(&mut self, count: usize) {
        self.link_count = count;
    }

    pub(crate) fn reset(&mut self) {
        self.hovered = false;
        self.show_links = false;
        self.areas = CardAreas::default();
    }

    fn enter(&mut self) {
        self.hovered = true;
    }

    fn leave(&mut self) {
        self.hovered = false;
        self.show_links = false;
    }

    fn toggle_links(&mut self) {
        if self.hovered {
            self.show_links = !self.show_links;
        }
    }

    fn link_action(&self, index: usize) -> Option<CardAction> {
        (self.show_links && index < self.link_count).then_some(CardAction::OpenLink(index))
    }

    fn link_at(&self, position: Position) -> Option<usize> {
        self.areas.links.iter().position(|r| r.contains(position))
    }

    fn over_card(&self, position: Position) -> bool {
        self.areas.card.is_some_and(|r| r.contains(position))
    }

    fn over_button(&self, position: Position) -> bool {
        self.areas.button.is_some_and(|r| r.contains(position))
    }
}
