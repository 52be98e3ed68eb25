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

//! Application configuration.
//!
//! This module manages the application configuration file. Every section has
//! defaults, so a partial file only overrides what it names.

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{model::SiteContent, nav::debounce::UnlockPolicy, scroll::EasingType};

const CONFIG_NAME: &str = "stagefront";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub navigation: NavigationConfig,
    pub page: PageConfig,
    pub effects: EffectsConfig,
    pub site: SiteContent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            navigation: NavigationConfig::default(),
            page: PageConfig::default(),
            effects: EffectsConfig::default(),
            site: SiteContent::default(),
        }
    }
}

/// Carousel input handling.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    pub cooldown_ms: u64,
    pub swipe_threshold_px: f64,
    pub cell_width_px: f64,
    pub cell_height_px: f64,
    pub unlock: UnlockPolicy,
    pub stuck_lock_timeout_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 700,
            swipe_threshold_px: 50.0,
            cell_width_px: 8.0,
            cell_height_px: 16.0,
            unlock: UnlockPolicy::Timer,
            stuck_lock_timeout_ms: 2000,
        }
    }
}

impl NavigationConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn stuck_lock_timeout(&self) -> Duration {
        Duration::from_millis(self.stuck_lock_timeout_ms)
    }
}

/// Page layout and scrolling.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    /// Fraction of a section that must be on screen for it to become active.
    pub visibility_threshold: f64,
    /// Fraction of the first section scrolled past before the header shows.
    pub header_fraction: f64,
    pub wheel_lines: u16,
    pub transition_ms: u64,
    pub easing: EasingType,
    pub tick_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: 0.5,
            header_fraction: 0.5,
            wheel_lines: 3,
            transition_ms: 450,
            easing: EasingType::Cubic,
            tick_ms: 50,
        }
    }
}

impl PageConfig {
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

/// Decorative effects.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EffectsConfig {
    pub enabled: bool,
    /// Cells per grain, higher is sparser.
    pub grain_density: u32,
    pub scramble_speed_ms: u64,
    pub scramble_delay_ms: u64,
    pub sparkle_count: usize,
    pub sparkle_interval_ms: u64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            grain_density: 12,
            scramble_speed_ms: 50,
            scramble_delay_ms: 500,
            sparkle_count: 15,
            sparkle_interval_ms: 1200,
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Location for the log file, next to the configuration file.
pub fn log_file_path() -> PathBuf {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .and_then(|path| path.parent().map(|dir| dir.join("stagefront.log")))
        .unwrap_or_else(|| std::env::temp_dir().join("stagefront.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.navigation.cooldown(), Duration::from_millis(700));
        assert_eq!(config.navigation.swipe_threshold_px, 50.0);
        assert_eq!(config.navigation.unlock, UnlockPolicy::Timer);
        assert_eq!(config.page.visibility_threshold, 0.5);
        assert_eq!(config.site.albums.len(), 3);
    }

    #[test]
    fn test_zero_tick_is_not_a_busy_loop() {
        let page = PageConfig {
            tick_ms: 0,
            ..Default::default()
        };
        assert_eq!(page.tick_rate(), Duration::from_millis(1));
    }
}
