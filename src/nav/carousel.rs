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

//! The album carousel controller.
//!
//! A controller exists only while the albums section is mounted. It is built
//! with the number of slides and an optional starting index, receives every
//! raw input routed to the carousel, and is consumed by
//! [`teardown`](CarouselController::teardown) when the section unmounts.
//!
//! The controller also owns the horizontal offset of the slide strip. When
//! that slide animation completes the debouncer is told, which is what the
//! `animation_done` unlock policy waits for.

use std::time::Instant;

use tracing::{debug, info};

use crate::{
    config::{NavigationConfig, PageConfig},
    error::NavError,
    nav::{
        Direction, Effect, RawInput,
        debounce::Debouncer,
        input::InputNormalizer,
        slides::SlideIndex,
    },
    scroll::ScrollAnimator,
};

#[derive(Debug)]
pub(crate) struct CarouselController {
    normalizer: InputNormalizer,
    debouncer: Debouncer,
    slides: SlideIndex,
    strip: ScrollAnimator,
    slide_width: u16,
}

impl CarouselController {
    pub(crate) fn new(
        len: usize,
        start_index: usize,
        nav: &NavigationConfig,
        page: &PageConfig,
    ) -> Result<Self, NavError> {
        let slides = SlideIndex::with_index(len, start_index)?;
        info!(len, index = slides.index(), "carousel mounted");

        Ok(Self {
            normalizer: InputNormalizer::new(nav.swipe_threshold_px),
            debouncer: Debouncer::new(nav.cooldown(), nav.unlock, nav.stuck_lock_timeout()),
            slides,
            strip: ScrollAnimator::new(page.transition(), page.easing),
            slide_width: 0,
        })
    }

    pub(crate) fn index(&self) -> usize {
        self.slides.index()
    }

    pub(crate) fn len(&self) -> usize {
        self.slides.len()
    }

    pub(crate) fn is_first(&self) -> bool {
        self.slides.is_first()
    }

    pub(crate) fn is_last(&self) -> bool {
        self.slides.is_last()
    }

    pub(crate) fn is_locked(&self, now: Instant) -> bool {
        self.debouncer.is_locked(now)
    }

    /// Horizontal offset of the slide strip, in columns.
    pub(crate) fn strip_offset(&self) -> u16 {
        self.strip.current()
    }

    /// Normalizes, debounces and applies a raw input.
    ///
    /// Returns `None` when the input is noise or arrives while locked.
    pub(crate) fn handle_input(&mut self, input: &RawInput, now: Instant) -> Option<Effect> {
        let direction = self.normalizer.normalize(input)?;
        self.advance(direction, now)
    }

    pub(crate) fn advance(&mut self, direction: Direction, now: Instant) -> Option<Effect> {
        if !self.debouncer.try_admit(now) {
            debug!(?direction, "navigation dropped while locked");
            return None;
        }

        let effect = self.slides.advance(direction);
        debug!(?direction, ?effect, "navigation admitted");
        self.apply(effect, now);
        Some(effect)
    }

    /// Jumps straight to a slide, as a position indicator click does.
    ///
    /// A jump is never refused by the lock, but it starts a new lock window
    /// so the gesture tail that follows it is dropped.
    pub(crate) fn jump_to(&mut self, target: i64, now: Instant) -> Effect {
        self.debouncer.lock(now);
        let effect = self.slides.jump_to(target);
        debug!(target, ?effect, "jump");
        self.apply(effect, now);
        effect
    }

    pub(crate) fn set_slide_width(&mut self, width: u16) {
        if width != self.slide_width {
            self.slide_width = width;
            self.strip.set(self.strip_target(self.slides.index()));
        }
    }

    /// Advances the slide animation.
    pub(crate) fn update(&mut self, now: Instant) {
        if self.strip.update(now) {
            self.debouncer.animation_done();
        }
    }

    /// Ends the controller's lifetime, returning the index to resume from.
    pub(crate) fn teardown(self) -> usize {
        let index = self.slides.index();
        info!(index, "carousel torn down");
        index
    }

    fn apply(&mut self, effect: Effect, now: Instant) {
        match effect {
            Effect::Moved(index) => {
                let max = self.strip_target(self.slides.len() - 1);
                self.strip.scroll_to(self.strip_target(index), max, now);
                if !self.strip.is_animating() {
                    self.debouncer.animation_done();
                }
            }
            // The strip stays put, and the page may have nowhere to go
            Effect::BoundaryExit(_) => self.debouncer.no_animation(),
        }
    }

    fn strip_target(&self, index: usize) -> u16 {
        (index as u32 * self.slide_width as u32).min(u16::MAX as u32) as u16
    }
}
