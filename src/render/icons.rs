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

//! Unicode symbols for the TUI.
//!
//! All of these are single-width in common terminal fonts, so they can be
//! placed cell by cell.

// Navigation
pub(crate) const ICON_ARROW_LEFT: &str = "\u{25C0}";
pub(crate) const ICON_ARROW_RIGHT: &str = "\u{25B6}";
pub(crate) const ICON_SCROLL_DOWN: &str = "\u{2193}";
pub(crate) const ICON_BACK: &str = "\u{2190}";

// Position dots
pub(crate) const ICON_DOT: &str = "\u{25CB}";
pub(crate) const ICON_DOT_ACTIVE: &str = "\u{25CF}";

// Sparkles
pub(crate) const ICON_SPARK_LARGE: &str = "\u{2726}";
pub(crate) const ICON_SPARK_SMALL: &str = "\u{00B7}";

// Grain
pub(crate) const ICON_GRAIN_BRIGHT: &str = "*";
pub(crate) const ICON_GRAIN: &str = "\u{00B7}";
pub(crate) const ICON_GRAIN_FAINT: &str = ".";
