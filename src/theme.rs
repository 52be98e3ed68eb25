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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the site's cosmic palette and provides utilities for
//! converting and blending colours, including the hexadecimal form used for
//! terminal emulator styling.

use ratatui::style::Color;

use crate::effects::grain::GrainTone;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) text_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) secondary_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) card_colour: Color,
    pub(crate) overlay_colour: Color,
    pub(crate) status_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) grain_bright: Color,
    pub(crate) grain_pink: Color,
    pub(crate) grain_blue: Color,
    pub(crate) grain_faint: Color,
}

impl Default for Theme {
    // Returns the standard site theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(8, 6, 14),
            text_colour: Color::Rgb(255, 255, 255),
            muted_colour: Color::Rgb(140, 132, 160),
            accent_colour: Color::Rgb(217, 70, 239),
            secondary_colour: Color::Rgb(155, 135, 245),
            border_colour: Color::Rgb(90, 80, 120),
            card_colour: Color::Rgb(26, 20, 40),
            overlay_colour: Color::Rgb(14, 10, 22),
            status_colour: Color::Rgb(50, 30, 60),
            error_colour: Color::Rgb(240, 90, 90),

            grain_bright: Color::Rgb(220, 220, 230),
            grain_pink: Color::Rgb(217, 70, 239),
            grain_blue: Color::Rgb(30, 64, 175),
            grain_faint: Color::Rgb(220, 220, 230),
        }
    }

    pub(crate) fn grain_colour(&self, tone: GrainTone) -> Color {
        match tone {
            GrainTone::Bright => self.grain_bright,
            GrainTone::Pink => self.grain_pink,
            GrainTone::Blue => self.grain_blue,
            GrainTone::Faint => self.grain_faint,
        }
    }

    /// Blends `colour` over the background, `alpha` in `[0, 1]`.
    ///
    /// Non-RGB colours are returned as they are.
    pub(crate) fn fade(&self, colour: Color, alpha: f64) -> Color {
        match (colour, self.background_colour) {
            (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
                let a = alpha.clamp(0.0, 1.0);
                let mix = |c: u8, base: u8| (base as f64 + (c as f64 - base as f64) * a).round() as u8;
                Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
            }
            _ => colour,
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Returns `None` for non-RGB colours.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
