use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::gesture::{TapThresholds, DOUBLE_TAP_DELAY_MS, DOUBLE_TAP_RADIUS};

pub const NUM_WALLPAPERS: usize = 2;
pub const IMAGE_BASE_URL: &str = "https://unsplash.it";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default, deny_unknown_fields)]
pub struct Config {
    pub double_tap_delay_ms: i64,
    pub double_tap_radius: f64,
    pub num_wallpapers: usize,
    pub image_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            double_tap_delay_ms: DOUBLE_TAP_DELAY_MS,
            double_tap_radius: DOUBLE_TAP_RADIUS,
            num_wallpapers: NUM_WALLPAPERS,
            image_base_url: IMAGE_BASE_URL.to_owned(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Config> {
        let config: Config = serde_json::from_str(json).context("invalid config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the config at `path`, or returns the defaults when there is none.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let Some(path) = path else {
            return Ok(Config::default());
        };

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;

        Config::from_json(&json).with_context(|| format!("in {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.double_tap_delay_ms < 0 {
            bail!("DoubleTapDelayMs must not be negative");
        }

        if !self.double_tap_radius.is_finite() || self.double_tap_radius < 0.0 {
            bail!("DoubleTapRadius must be a non-negative number");
        }

        Ok(())
    }

    pub fn tap_thresholds(&self) -> TapThresholds {
        TapThresholds {
            delay_ms: self.double_tap_delay_ms,
            radius: self.double_tap_radius,
        }
    }
}
