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

//! Cosmic grain background.
//!
//! A [`GrainField`] is an endless iterator of frames. Each frame scatters
//! `width * height / density` draws over the area; a draw becomes a visible
//! grain only when its intensity lands in one of the tone bands, so most of
//! the area stays dark.
//!
//! Once [`cancel`](GrainField::cancel)led the field yields nothing more and
//! cannot be restarted. Owners must cancel it on teardown; dropping a live
//! field is logged.

use std::iter::FusedIterator;

use rand::rngs::StdRng;
use tracing::warn;

use crate::effects::{seeded_rng, unit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GrainTone {
    /// Bright silver, the rarest.
    Bright,
    Pink,
    Blue,
    /// Faint silver dust.
    Faint,
}

impl GrainTone {
    /// Picks a tone for an intensity draw, with the matching opacity range.
    fn for_intensity(intensity: f64) -> Option<(Self, f64, f64)> {
        if intensity > 0.99 {
            Some((Self::Bright, 0.7, 0.3))
        } else if intensity > 0.98 {
            Some((Self::Pink, 0.5, 0.5))
        } else if intensity > 0.96 {
            Some((Self::Blue, 0.4, 0.5))
        } else if intensity > 0.80 {
            Some((Self::Faint, 0.1, 0.2))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Grain {
    pub(crate) x: u16,
    pub(crate) y: u16,
    pub(crate) tone: GrainTone,
    pub(crate) alpha: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GrainFrame {
    pub(crate) number: u64,
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) grains: Vec<Grain>,
}

#[derive(Debug)]
pub(crate) struct GrainField {
    width: u16,
    height: u16,
    density: u32,
    frame: u64,
    cancelled: bool,
    rng: StdRng,
}

impl GrainField {
    pub(crate) fn new(width: u16, height: u16, density: u32) -> Self {
        Self::with_rng(width, height, density, seeded_rng())
    }

    pub(crate) fn with_rng(width: u16, height: u16, density: u32, rng: StdRng) -> Self {
        Self {
            width,
            height,
            density: density.max(1),
            frame: 0,
            cancelled: false,
            rng,
        }
    }

    pub(crate) fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub(crate) fn cancel(&mut self) {
        self.cancelled = true;
    }

    fn draws(&self) -> usize {
        (self.width as usize * self.height as usize) / self.density as usize
    }
}

impl Iterator for GrainField {
    type Item = GrainFrame;

    fn next(&mut self) -> Option<GrainFrame> {
        if self.cancelled {
            return None;
        }

        self.frame += 1;
        let draws = self.draws();
        let mut grains = Vec::with_capacity(draws / 4);

        for _ in 0..draws {
            let x = (unit(&mut self.rng) * self.width as f64) as u16;
            let y = (unit(&mut self.rng) * self.height as f64) as u16;
            let intensity = unit(&mut self.rng);

            if let Some((tone, base, spread)) = GrainTone::for_intensity(intensity) {
                grains.push(Grain {
                    x: x.min(self.width.saturating_sub(1)),
                    y: y.min(self.height.saturating_sub(1)),
                    tone,
                    alpha: base + unit(&mut self.rng) * spread,
                });
            }
        }

        Some(GrainFrame {
            number: self.frame,
            width: self.width,
            height: self.height,
            grains,
        })
    }
}

impl FusedIterator for GrainField {}

impl Drop for GrainField {
    fn drop(&mut self) {
        if !self.cancelled {
            warn!(frames = self.frame, "grain field dropped without being cancelled");
        }
    }
}
