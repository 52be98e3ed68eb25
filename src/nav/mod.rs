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

//! Carousel and section navigation.
//!
//! Raw input flows through this module in a fixed order:
//!
//! * [`input`]: wheel, swipe and key input is reduced to a single
//!   [`Direction`], or discarded.
//! * [`debounce`]: at most one direction is admitted per cool-down window.
//! * [`slides`]: the admitted direction moves the active slide, or becomes a
//!   [`BoundaryExit`] when it would leave the slide range.
//! * [`composer`]: boundary exits turn into scroll transitions between the
//!   page sections.
//!
//! [`carousel`] wires the first three together into the controller owned by
//! the albums section while it is mounted.

pub(crate) mod carousel;
pub(crate) mod composer;
pub(crate) mod debounce;
pub(crate) mod input;
pub(crate) mod slides;

pub(crate) use carousel::CarouselController;
pub(crate) use composer::SectionComposer;
pub(crate) use input::{GestureTracker, RawInput};

/// A normalized navigation signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Next,
    Previous,
}

/// Intent to leave the carousel towards a neighbouring section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BoundaryExit {
    Up,
    Down,
}

/// Outcome of an admitted navigation signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Effect {
    Moved(usize),
    BoundaryExit(BoundaryExit),
}
