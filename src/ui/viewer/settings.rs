// SPDX-License-Identifier: MPL-2.0
//! Viewer settings resolved from the user configuration.

use crate::config::{Config, UrlStrategy};
use crate::domain::ui::newtypes::{HideDelay, ZoomFactor};
use crate::ui::state::gesture::GestureThresholds;
use crate::ui::state::preload::PreloadConfig;
use std::time::Duration;

/// Everything a viewer session needs from the configuration, validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSettings {
    pub zoom_factor: ZoomFactor,
    pub desktop_hide_delay: HideDelay,
    pub touch_hide_delay: HideDelay,
    pub orientation_debounce: Duration,
    pub mobile_max_width: f32,
    pub url_strategy: UrlStrategy,
    pub gestures: GestureThresholds,
    pub preload: PreloadConfig,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ViewerSettings {
    fn from(config: &Config) -> Self {
        Self {
            zoom_factor: ZoomFactor::new(config.viewer.zoom_factor),
            desktop_hide_delay: HideDelay::from_millis(config.viewer.desktop_hide_delay_ms),
            touch_hide_delay: HideDelay::from_millis(config.viewer.touch_hide_delay_ms),
            orientation_debounce: Duration::from_millis(config.device.orientation_debounce_ms),
            mobile_max_width: config.device.mobile_max_width_px,
            url_strategy: config.viewer.url_strategy,
            gestures: GestureThresholds::from(&config.gestures),
            preload: PreloadConfig::from(&config.preload),
        }
    }
}

impl ViewerSettings {
    /// Hide delay for the given device class.
    #[must_use]
    pub fn hide_delay(&self, is_mobile: bool) -> HideDelay {
        if is_mobile {
            self.touch_hide_delay
        } else {
            self.desktop_hide_delay
        }
    }
}
