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

//! Decorative effects.
//!
//! None of these affect navigation. Each is advanced from the application
//! tick with the current time and read back by the renderer.
//!
//! * [`grain`]: a cancellable, endless stream of grain frames.
//! * [`scramble`]: text resolving left to right out of random glyphs.
//! * [`sparkle`]: a small set of sparks, one replaced at a time.

pub(crate) mod grain;
pub(crate) mod scramble;
pub(crate) mod sparkle;

pub(crate) use grain::GrainField;
pub(crate) use scramble::TextScramble;
pub(crate) use sparkle::Sparkles;

use std::time::{Duration, Instant};

use rand::{
    SeedableRng,
    distr::{Distribution, StandardUniform},
    rngs::StdRng,
};

use crate::{config::EffectsConfig, effects::grain::GrainFrame, model::SiteContent};

pub(crate) fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(rand::random())
}

/// A uniform draw from `[0, 1)`.
pub(crate) fn unit(rng: &mut StdRng) -> f64 {
    StandardUniform.sample(rng)
}

/// Every effect on the page, advanced together from the tick.
///
/// With effects disabled, texts show resolved and no grain is produced.
pub(crate) struct SiteEffects {
    enabled: bool,
    grain_density: u32,
    grain: Option<GrainField>,
    frame: Option<GrainFrame>,
    artist: TextScramble,
    album_title: TextScramble,
    sparkles: Sparkles,
}

impl SiteEffects {
    pub(crate) fn new(config: &EffectsConfig, content: &SiteContent, now: Instant) -> Self {
        let delay = Duration::from_millis(config.scramble_delay_ms);
        let step = Duration::from_millis(config.scramble_speed_ms.max(1));

        Self {
            enabled: config.enabled,
            grain_density: config.grain_density,
            grain: None,
            frame: None,
            artist: TextScramble::new(&content.artist_name, delay, step, now),
            album_title: TextScramble::new("", Duration::ZERO, step, now),
            sparkles: Sparkles::new(config.sparkle_count, Duration::from_millis(config.sparkle_interval_ms), now),
        }
    }

    pub(crate) fn artist_name(&self) -> String {
        if self.enabled {
            self.artist.output().to_string()
        } else {
            self.artist.target()
        }
    }

    pub(crate) fn album_title(&self) -> String {
        if self.enabled {
            self.album_title.output().to_string()
        } else {
            self.album_title.target()
        }
    }

    pub(crate) fn restart_album_title(&mut self, title: &str, now: Instant) {
        self.album_title.restart(title, now);
    }

    pub(crate) fn sparkles(&self) -> &Sparkles {
        &self.sparkles
    }

    pub(crate) fn grain_frame(&self) -> Option<&GrainFrame> {
        self.frame.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn grain_mounted(&self) -> bool {
        self.grain.is_some()
    }

    /// Starts the grain stream for a `width` by `height` area.
    pub(crate) fn mount_grain(&mut self, width: u16, height: u16) {
        if self.enabled && self.grain.is_none() {
            self.grain = Some(GrainField::new(width, height, self.grain_density));
        }
    }

    pub(crate) fn resize_grain(&mut self, width: u16, height: u16) {
        if let Some(grain) = self.grain.as_mut() {
            grain.resize(width, height);
        }
    }

    /// Cancels the grain stream and releases it.
    pub(crate) fn unmount_grain(&mut self) {
        if let Some(mut grain) = self.grain.take() {
            grain.cancel();
        }
        self.frame = None;
    }

    pub(crate) fn update(&mut self, now: Instant) {
        if !self.enabled {
            return;
        }

        self.artist.update(now);
        self.album_title.update(now);
        self.sparkles.update(now);
        self.frame = self.grain.as_mut().and_then(|grain| grain.next());
    }
}

impl Drop for SiteEffects {
    fn drop(&mut self) {
        self.unmount_grain();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grain_lifecycle() {
        let now = Instant::now();
        let mut effects = SiteEffects::new(&EffectsConfig::default(), &SiteContent::default(), now);
        assert!(!effects.grain_mounted());

        effects.mount_grain(40, 10);
        effects.update(now);
        assert!(effects.grain_frame().is_some());

        effects.unmount_grain();
        assert!(!effects.grain_mounted());
        assert!(effects.grain_frame().is_none());
    }

    #[test]
    fn test_disabled_shows_plain_text() {
        let config = EffectsConfig {
            enabled: false,
            ..EffectsConfig::default()
        };
        let now = Instant::now();
        let mut effects = SiteEffects::new(&config, &SiteContent::default(), now);
        effects.restart_album_title("RODEO", now);
        effects.mount_grain(40, 10);
        effects.update(now);

        assert_eq!(effects.artist_name(), "AADHYARAJA");
        assert_eq!(effects.album_title(), "RODEO");
        assert!(!effects.grain_mounted());
    }

    #[test]
    fn test_artist_name_resolves() {
        let now = Instant::now();
        let mut effects = SiteEffects::new(&EffectsConfig::default(), &SiteContent::default(), now);
        effects.update(now);
        assert_eq!(effects.artist_name(), "");

        effects.update(now + Duration::from_secs(5));
        assert_eq!(effects.artist_name(), "AADHYARAJA");
    }
}
