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

//! Active slide index.
//!
//! The index always lies in `0..len`. Moving past either end leaves it
//! unchanged and reports a boundary exit instead.

use crate::{
    error::NavError,
    nav::{BoundaryExit, Direction, Effect},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SlideIndex {
    len: usize,
    index: usize,
}

impl SlideIndex {
    #[cfg(test)]
    pub(crate) fn new(len: usize) -> Result<Self, NavError> {
        Self::with_index(len, 0)
    }

    /// Creates an index positioned at `index`, clamped into range.
    pub(crate) fn with_index(len: usize, index: usize) -> Result<Self, NavError> {
        if len == 0 {
            return Err(NavError::EmptyCollection);
        }
        Ok(Self {
            len,
            index: index.min(len - 1),
        })
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_first(&self) -> bool {
        self.index == 0
    }

    pub(crate) fn is_last(&self) -> bool {
        self.index == self.len - 1
    }

    pub(crate) fn advance(&mut self, direction: Direction) -> Effect {
        match direction {
            Direction::Next if self.is_last() => Effect::BoundaryExit(BoundaryExit::Down),
            Direction::Next => {
                self.index += 1;
                Effect::Moved(self.index)
            }
            Direction::Previous if self.is_first() => Effect::BoundaryExit(BoundaryExit::Up),
            Direction::Previous => {
                self.index -= 1;
                Effect::Moved(self.index)
            }
        }
    }

    /// Jumps straight to `target`, clamping out-of-range requests.
    pub(crate) fn jump_to(&mut self, target: i64) -> Effect {
        let last = (self.len - 1) as i64;
        self.index = target.clamp(0, last) as usize;
        Effect::Moved(self.index)
    }
}
