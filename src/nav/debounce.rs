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

//! Navigation debouncing.
//!
//! One gesture on a trackpad or a held key produces a burst of inputs. The
//! [`Debouncer`] admits the first of them and locks; everything arriving while
//! locked is dropped, never queued.
//!
//! The lock is evaluated against the caller's clock rather than a timer
//! callback, so there is nothing to cancel when the owner goes away.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// How a lock is released.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub(crate) enum UnlockPolicy {
    /// Released once the cool-down has elapsed, whether or not the visual
    /// transition has finished.
    #[default]
    Timer,

    /// Released when the owner reports the transition as finished, or after
    /// the stuck-lock timeout.
    AnimationDone,
}

#[derive(Debug, Clone)]
pub(crate) struct Debouncer {
    cooldown: Duration,
    stuck_lock_timeout: Duration,
    policy: UnlockPolicy,
    locked_at: Option<Instant>,
    /// The current lock has no animation to wait for.
    cooldown_only: bool,
}

impl Debouncer {
    pub(crate) fn new(cooldown: Duration, policy: UnlockPolicy, stuck_lock_timeout: Duration) -> Self {
        Self {
            cooldown,
            // Never give up on an animation sooner than the plain cool-down.
            stuck_lock_timeout: stuck_lock_timeout.max(cooldown),
            policy,
            locked_at: None,
            cooldown_only: false,
        }
    }

    pub(crate) fn is_locked(&self, now: Instant) -> bool {
        match self.locked_at {
            Some(locked_at) => now.saturating_duration_since(locked_at) < self.lock_duration(),
            None => false,
        }
    }

    /// Admits a signal at `now` if unlocked, locking for the next window.
    pub(crate) fn try_admit(&mut self, now: Instant) -> bool {
        if self.is_locked(now) {
            return false;
        }
        self.locked_at = Some(now);
        self.cooldown_only = false;
        true
    }

    /// Starts a lock window unconditionally.
    pub(crate) fn lock(&mut self, now: Instant) {
        self.locked_at = Some(now);
        self.cooldown_only = false;
    }

    /// Reports the end of the visual transition.
    ///
    /// Only meaningful under [`UnlockPolicy::AnimationDone`]; a timer lock
    /// keeps running until its cool-down has elapsed.
    pub(crate) fn animation_done(&mut self) {
        if self.policy == UnlockPolicy::AnimationDone {
            self.locked_at = None;
        }
    }

    /// Reports that the admitted navigation started no transition of the
    /// owner's, so the current lock ends with the plain cool-down.
    pub(crate) fn no_animation(&mut self) {
        self.cooldown_only = true;
    }

    fn lock_duration(&self) -> Duration {
        if self.cooldown_only {
            return self.cooldown;
        }
        match self.policy {
            UnlockPolicy::Timer => self.cooldown,
            UnlockPolicy::AnimationDone => self.stuck_lock_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COOLDOWN: Duration = Duration::from_millis(700);

    #[test]
    fn test_first_signal_admitted_then_locked() {
        let mut debouncer = Debouncer::new(COOLDOWN, UnlockPolicy::Timer, Duration::ZERO);
        let t0 = Instant::now();

        assert!(!debouncer.is_locked(t0));
        assert!(debouncer.try_admit(t0));
        assert!(debouncer.is_locked(t0));
        assert!(!debouncer.try_admit(t0 + Duration::from_millis(10)));
        assert!(!debouncer.try_admit(t0 + Duration::from_millis(699)));
    }

    #[test]
    fn test_timer_releases_after_cooldown() {
        let mut debouncer = Debouncer::new(COOLDOWN, UnlockPolicy::Timer, Duration::ZERO);
        let t0 = Instant::now();

        assert!(debouncer.try_admit(t0));
        assert!(!debouncer.is_locked(t0 + COOLDOWN));
        assert!(debouncer.try_admit(t0 + COOLDOWN));
    }

    #[test]
    fn test_dropped_signals_do_not_extend_the_window() {
        let mut debouncer = Debouncer::new(COOLDOWN, UnlockPolicy::Timer, Duration::ZERO);
        let t0 = Instant::now();

        assert!(debouncer.try_admit(t0));
        for ms in (50..700).step_by(50) {
            assert!(!debouncer.try_admit(t0 + Duration::from_millis(ms)));
        }
        assert!(debouncer.try_admit(t0 + Duration::from_millis(700)));
    }

    #[test]
    fn test_timer_ignores_animation_done() {
        let mut debouncer = Debouncer::new(COOLDOWN, UnlockPolicy::Timer, Duration::ZERO);
        let t0 = Instant::now();

        debouncer.try_admit(t0);
        debouncer.animation_done();
        assert!(debouncer.is_locked(t0 + Duration::from_millis(100)));
    }

    #[test]
    fn test_animation_done_releases_early() {
        let mut debouncer = Debouncer::new(
            COOLDOWN,
            UnlockPolicy::AnimationDone,
            Duration::from_millis(2000),
        );
        let t0 = Instant::now();

        debouncer.try_admit(t0);
        // Slow rendering: still locked past the plain cool-down
        assert!(debouncer.is_locked(t0 + Duration::from_millis(1500)));

        debouncer.animation_done();
        assert!(debouncer.try_admit(t0 + Duration::from_millis(1500)));
    }

    #[test]
    fn test_stuck_lock_timeout() {
        let mut debouncer = Debouncer::new(
            COOLDOWN,
            UnlockPolicy::AnimationDone,
            Duration::from_millis(2000),
        );
        let t0 = Instant::now();

        debouncer.try_admit(t0);
        assert!(!debouncer.is_locked(t0 + Duration::from_millis(2000)));
    }

    #[test]
    fn test_no_animation_falls_back_to_cooldown() {
        let mut debouncer = Debouncer::new(
            COOLDOWN,
            UnlockPolicy::AnimationDone,
            Duration::from_millis(2000),
        );
        let t0 = Instant::now();

        debouncer.try_admit(t0);
        debouncer.no_animation();
        assert!(debouncer.is_locked(t0 + Duration::from_millis(300)));
        assert!(debouncer.try_admit(t0 + COOLDOWN));

        // The next lock waits for its animation again
        assert!(debouncer.is_locked(t0 + COOLDOWN + Duration::from_millis(1500)));
    }
}
