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

//! Text scramble.
//!
//! After an initial delay the text is shown as random glyphs, and every step
//! one more character from the left settles on its final value. Whitespace is
//! never scrambled.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;

use crate::effects::{seeded_rng, unit};

const GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!<>-_\\/[]{}=+*^?#";

#[derive(Debug)]
pub(crate) struct TextScramble {
    target: Vec<char>,
    delay: Duration,
    step: Duration,
    started: Instant,
    steps_shown: Option<usize>,
    output: String,
    rng: StdRng,
}

impl TextScramble {
    pub(crate) fn new(text: &str, delay: Duration, step: Duration, now: Instant) -> Self {
        Self::with_rng(text, delay, step, now, seeded_rng())
    }

    pub(crate) fn with_rng(
        text: &str,
        delay: Duration,
        step: Duration,
        now: Instant,
        rng: StdRng,
    ) -> Self {
        Self {
            target: text.chars().collect(),
            delay,
            step: step.max(Duration::from_millis(1)),
            started: now,
            steps_shown: None,
            output: String::new(),
            rng,
        }
    }

    /// Starts over, for a new text or the same one.
    pub(crate) fn restart(&mut self, text: &str, now: Instant) {
        self.target = text.chars().collect();
        self.started = now;
        self.steps_shown = None;
        self.output.clear();
    }

    pub(crate) fn output(&self) -> &str {
        &self.output
    }

    pub(crate) fn target(&self) -> String {
        self.target.iter().collect()
    }

    #[cfg(test)]
    pub(crate) fn is_done(&self) -> bool {
        self.steps_shown.is_some_and(|steps| steps >= self.target.len())
    }

    /// Advances to `now`, returning the text to display.
    ///
    /// Glyphs are only re-rolled when a new step is reached, so calling this
    /// more often than the step interval does not flicker.
    pub(crate) fn update(&mut self, now: Instant) -> &str {
        let Some(running) = now
            .saturating_duration_since(self.started)
            .checked_sub(self.delay)
        else {
            return &self.output;
        };

        let steps = (running.as_millis() / self.step.as_millis()) as usize + 1;
        let resolved = steps.min(self.target.len());
        if self.steps_shown == Some(resolved) {
            return &self.output;
        }
        self.steps_shown = Some(resolved);

        self.output = self
            .target
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if i < resolved || c.is_whitespace() {
                    c
                } else {
                    random_glyph(&mut self.rng)
                }
            })
            .collect();

        &self.output
    }
}

fn random_glyph(rng: &mut StdRng) -> char {
    let index = (unit(rng) * GLYPHS.len() as f64) as usize;
    GLYPHS[index.min(GLYPHS.len() - 1)] as char
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    const DELAY: Duration = Duration::from_millis(500);
    const STEP: Duration = Duration::from_millis(50);

    fn scramble(text: &str, now: Instant) -> TextScramble {
        TextScramble::with_rng(text, DELAY, STEP, now, StdRng::seed_from_u64(3))
    }

    #[test]
    fn test_nothing_before_delay() {
        let t0 = Instant::now();
        let mut s = scramble("UTOPIA", t0);
        assert_eq!(s.update(t0 + Duration::from_millis(499)), "");
        assert!(!s.is_done());
    }

    #[test]
    fn test_resolves_left_to_right() {
        let t0 = Instant::now();
        let mut s = scramble("RODEO", t0);

        let first = s.update(t0 + DELAY).to_string();
        assert_eq!(first.chars().count(), 5);
        assert!(first.starts_with('R'));

        let third = s.update(t0 + DELAY + STEP * 2).to_string();
        assert!(third.starts_with("ROD"));
        assert!(!s.is_done());

        assert_eq!(s.update(t0 + DELAY + STEP * 4), "RODEO");
        assert!(s.is_done());
        assert_eq!(s.update(t0 + Duration::from_secs(60)), "RODEO");
    }

    #[test]
    fn test_whitespace_kept() {
        let t0 = Instant::now();
        let mut s = scramble("UTOPIA WORLD", t0);
        let out = s.update(t0 + DELAY).to_string();
        assert_eq!(out.chars().nth(6), Some(' '));
    }

    #[test]
    fn test_no_flicker_within_a_step() {
        let t0 = Instant::now();
        let mut s = scramble("ASTROWORLD", t0);
        let a = s.update(t0 + DELAY + Duration::from_millis(10)).to_string();
        let b = s.update(t0 + DELAY + Duration::from_millis(40)).to_string();
        assert_eq!(a, b);
    }

    #[test]
    fn test_restart() {
        let t0 = Instant::now();
        let mut s = scramble("UTOPIA", t0);
        s.update(t0 + Duration::from_secs(5));
        assert!(s.is_done());

        let t1 = t0 + Duration::from_secs(6);
        s.restart("RODEO", t1);
        assert!(!s.is_done());
        assert_eq!(s.output(), "");
        assert_eq!(s.target(), "RODEO");
        assert_eq!(s.update(t1 + Duration::from_secs(5)), "RODEO");
    }

    #[test]
    fn test_empty_text_is_done_once_started() {
        let t0 = Instant::now();
        let mut s = scramble("", t0);
        assert_eq!(s.update(t0 + DELAY), "");
        assert!(s.is_done());
    }
}
