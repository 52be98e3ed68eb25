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

//! Sparkles over the logo section.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;

use crate::effects::{seeded_rng, unit};

/// One spark. Positions are fractions of the area so sparks survive resizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Spark {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) scale: f64,
    pub(crate) opacity: f64,
}

#[derive(Debug)]
pub(crate) struct Sparkles {
    sparks: Vec<Spark>,
    interval: Duration,
    last_swap: Instant,
    rng: StdRng,
}

impl Sparkles {
    pub(crate) fn new(count: usize, interval: Duration, now: Instant) -> Self {
        Self::with_rng(count, interval, now, seeded_rng())
    }

    pub(crate) fn with_rng(count: usize, interval: Duration, now: Instant, mut rng: StdRng) -> Self {
        let sparks = (0..count).map(|_| random_spark(&mut rng)).collect();
        Self {
            sparks,
            interval: interval.max(Duration::from_millis(1)),
            last_swap: now,
            rng,
        }
    }

    pub(crate) fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    /// Replaces one random spark per elapsed interval.
    ///
    /// Returns the number of sparks replaced. After a long stall at most one
    /// full generation is replaced and the schedule restarts from `now`.
    pub(crate) fn update(&mut self, now: Instant) -> usize {
        if self.sparks.is_empty() {
            return 0;
        }

        let elapsed = now.saturating_duration_since(self.last_swap);
        let due = (elapsed.as_millis() / self.interval.as_millis()) as usize;
        if due == 0 {
            return 0;
        }

        let swaps = due.min(self.sparks.len());
        for _ in 0..swaps {
            let index = ((unit(&mut self.rng) * self.sparks.len() as f64) as usize)
                .min(self.sparks.len() - 1);
            self.sparks[index] = random_spark(&mut self.rng);
        }

        self.last_swap = if due > swaps {
            now
        } else {
            self.last_swap + self.interval * swaps as u32
        };
        swaps
    }
}

fn random_spark(rng: &mut StdRng) -> Spark {
    Spark {
        x: unit(rng),
        y: unit(rng),
        scale: 0.5 + unit(rng) * 0.5,
        opacity: 0.7 + unit(rng) * 0.3,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    const INTERVAL: Duration = Duration::from_millis(1200);

    fn sparkles(count: usize, now: Instant) -> Sparkles {
        Sparkles::with_rng(count, INTERVAL, now, StdRng::seed_from_u64(11))
    }

    #[test]
    fn test_initial_sparks() {
        let s = sparkles(15, Instant::now());
        assert_eq!(s.sparks().len(), 15);
        for spark in s.sparks() {
            assert!((0.0..1.0).contains(&spark.x));
            assert!((0.5..=1.0).contains(&spark.scale));
            assert!((0.7..=1.0).contains(&spark.opacity));
        }
    }

    #[test]
    fn test_one_swap_per_interval() {
        let t0 = Instant::now();
        let mut s = sparkles(15, t0);

        assert_eq!(s.update(t0 + Duration::from_millis(1199)), 0);
        assert_eq!(s.update(t0 + INTERVAL), 1);
        assert_eq!(s.update(t0 + INTERVAL + Duration::from_millis(100)), 0);
        assert_eq!(s.update(t0 + INTERVAL * 3), 2);
        assert_eq!(s.sparks().len(), 15);
    }

    #[test]
    fn test_long_stall_is_capped() {
        let t0 = Instant::now();
        let mut s = sparkles(3, t0);
        assert_eq!(s.update(t0 + Duration::from_secs(600)), 3);
        assert_eq!(s.update(t0 + Duration::from_secs(600) + Duration::from_millis(10)), 0);
    }

    #[test]
    fn test_no_sparks() {
        let t0 = Instant::now();
        let mut s = sparkles(0, t0);
        assert_eq!(s.update(t0 + Duration::from_secs(10)), 0);
    }
}
