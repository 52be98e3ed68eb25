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

use std::time::{Duration, Instant};

use crate::scroll::EasingType;

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: u16,
    to: u16,
}

/// Animates an offset towards a target.
///
/// Start a transition with [`scroll_to`](Self::scroll_to) or
/// [`scroll_by`](Self::scroll_by), then call [`update`](Self::update) on
/// every tick. Time is always supplied by the caller.
#[derive(Debug, Clone)]
pub(crate) struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    duration: Duration,
    easing: EasingType,
    current: u16,
}

impl ScrollAnimator {
    pub(crate) fn new(duration: Duration, easing: EasingType) -> Self {
        Self {
            animation: None,
            duration,
            easing,
            current: 0,
        }
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub(crate) fn current(&self) -> u16 {
        self.current
    }

    /// Where the offset ends up once the running animation completes.
    pub(crate) fn target(&self) -> u16 {
        self.animation.as_ref().map(|a| a.to).unwrap_or(self.current)
    }

    /// Moves immediately, cancelling any animation.
    pub(crate) fn set(&mut self, position: u16) {
        self.animation = None;
        self.current = position;
    }

    pub(crate) fn scroll_to(&mut self, target: u16, max: u16, now: Instant) {
        let target = target.min(max);

        if self.duration.is_zero() {
            self.set(target);
            return;
        }

        if target == self.current {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current,
            to: target,
        });
    }

    /// Scrolls relative to the current target, so repeated calls chain.
    pub(crate) fn scroll_by(&mut self, delta: i32, max: u16, now: Instant) {
        let target = (self.target() as i32 + delta).clamp(0, max as i32) as u16;
        self.scroll_to(target, max, now);
    }

    /// Advances the animation to `now`.
    ///
    /// Returns `true` on the update that completes an animation.
    pub(crate) fn update(&mut self, now: Instant) -> bool {
        let Some(anim) = &self.animation else {
            return false;
        };

        let elapsed = now.saturating_duration_since(anim.start);
        if elapsed >= self.duration {
            self.current = anim.to;
            self.animation = None;
            return true;
        }

        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = self.easing.apply(t);
        let from = anim.from as f64;
        let to = anim.to as f64;
        self.current = (from + (to - from) * eased).round() as u16;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> ScrollAnimator {
        ScrollAnimator::new(Duration::from_millis(100), EasingType::Linear)
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut anim = ScrollAnimator::new(Duration::ZERO, EasingType::Cubic);
        anim.scroll_to(40, 100, Instant::now());
        assert_eq!(anim.current(), 40);
        assert!(!anim.is_animating());
    }

    #[test]
    fn test_linear_progress() {
        let mut anim = animator();
        let t0 = Instant::now();

        anim.scroll_to(100, 200, t0);
        assert!(anim.is_animating());
        assert_eq!(anim.target(), 100);

        assert!(!anim.update(t0 + Duration::from_millis(50)));
        assert_eq!(anim.current(), 50);

        assert!(anim.update(t0 + Duration::from_millis(100)));
        assert_eq!(anim.current(), 100);
        assert!(!anim.is_animating());

        // Completion is reported once.
        assert!(!anim.update(t0 + Duration::from_millis(150)));
    }

    #[test]
    fn test_target_clamped_to_max() {
        let mut anim = animator();
        anim.scroll_to(300, 120, Instant::now());
        assert_eq!(anim.target(), 120);
    }

    #[test]
    fn test_scroll_by_chains_from_target() {
        let mut anim = animator();
        let t0 = Instant::now();

        anim.scroll_by(10, 200, t0);
        anim.scroll_by(10, 200, t0);
        anim.scroll_by(10, 200, t0);
        assert_eq!(anim.target(), 30);

        anim.scroll_by(-100, 200, t0);
        assert_eq!(anim.target(), 0);
    }

    #[test]
    fn test_set_cancels() {
        let mut anim = animator();
        let t0 = Instant::now();
        anim.scroll_to(80, 100, t0);
        anim.set(5);
        assert!(!anim.is_animating());
        assert!(!anim.update(t0 + Duration::from_secs(1)));
        assert_eq!(anim.current(), 5);
    }
}
