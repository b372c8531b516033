//! Runtime configuration.
//!
//! Every field has a default, so a configuration file only needs to name the
//! values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Top-level configuration structure for the site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub timing: TimingConfig,
    pub contact: ContactConfig,
    pub snowfall: SnowfallConfig,
    pub media: MediaConfig,
}

impl SiteConfig {
    /// Parses a configuration and brings every value into its usable range.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Replaces out-of-range values, logging each replacement at warn.
    pub fn sanitized(self) -> Self {
        Self {
            timing: self.timing.sanitized(),
            contact: self.contact,
            snowfall: self.snowfall.sanitized(),
            media: self.media,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), "loaded site configuration");
        Ok(config)
    }
}

/// Longest accepted duration, in seconds.
pub const MAX_SECONDS: f64 = 3600.0;

/// Most flakes a snowfall may hold.
pub const MAX_FLAKES: usize = 500;

/// Durations in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub carousel_autoplay: f64,
    pub carousel_slide: f64,
    pub flip_duration: f64,
    pub flip_autoplay: f64,
    pub flip_cooldown: f64,
    pub tilt_reset: f64,
    pub snowfall_step: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            carousel_autoplay: 5.0,
            carousel_slide: 0.5,
            flip_duration: 0.8,
            flip_autoplay: 4.0,
            flip_cooldown: 3.0,
            tilt_reset: 0.5,
            snowfall_step: 0.03,
        }
    }
}

impl TimingConfig {
    /// Clamps every duration into `0.0..=MAX_SECONDS`. Values that are not
    /// finite fall back to their default.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            carousel_autoplay: seconds("carousel_autoplay", self.carousel_autoplay, defaults.carousel_autoplay),
            carousel_slide: seconds("carousel_slide", self.carousel_slide, defaults.carousel_slide),
            flip_duration: seconds("flip_duration", self.flip_duration, defaults.flip_duration),
            flip_autoplay: seconds("flip_autoplay", self.flip_autoplay, defaults.flip_autoplay),
            flip_cooldown: seconds("flip_cooldown", self.flip_cooldown, defaults.flip_cooldown),
            tilt_reset: seconds("tilt_reset", self.tilt_reset, defaults.tilt_reset),
            snowfall_step: seconds("snowfall_step", self.snowfall_step, defaults.snowfall_step),
        }
    }
}

fn seconds(field: &str, value: f64, default: f64) -> f64 {
    if !value.is_finite() {
        tracing::warn!(field, value, default, "duration is not finite, using default");
        return default;
    }
    let clamped = value.clamp(0.0, MAX_SECONDS);
    if clamped != value {
        tracing::warn!(field, value, clamped, "duration out of range, clamped");
    }
    clamped
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Destination number for the messaging deep link, digits only.
    pub whatsapp_number: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "6281325835578".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowfallConfig {
    pub flake_count: usize,
}

impl Default for SnowfallConfig {
    fn default() -> Self {
        Self { flake_count: 50 }
    }
}

impl SnowfallConfig {
    pub fn sanitized(self) -> Self {
        if self.flake_count > MAX_FLAKES {
            tracing::warn!(flake_count = self.flake_count, max = MAX_FLAKES, "too many snowflakes, clamped");
            return Self { flake_count: MAX_FLAKES };
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Directory that relative gallery paths are resolved against.
    pub root: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            root: "assets".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = SiteConfig::from_json_str(r#"{ "timing": { "flip_duration": 1.2 } }"#).unwrap();
        assert_eq!(config.timing.flip_duration, 1.2);
        assert_eq!(config.timing.flip_cooldown, 3.0);
        assert_eq!(config.contact.whatsapp_number, "6281325835578");
        assert_eq!(config.snowfall.flake_count, 50);
    }

    #[test]
    fn empty_object_is_the_default_config() {
        assert_eq!(SiteConfig::from_json_str("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = SiteConfig::from_json_str(
            r#"{
                "timing": { "carousel_autoplay": 1e300, "flip_autoplay": 1e300, "snowfall_step": 1e300, "flip_cooldown": -2.0 },
                "snowfall": { "flake_count": 100000 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.timing.carousel_autoplay, MAX_SECONDS);
        assert_eq!(config.timing.flip_autoplay, MAX_SECONDS);
        assert_eq!(config.timing.snowfall_step, MAX_SECONDS);
        assert_eq!(config.timing.flip_cooldown, 0.0);
        assert_eq!(config.timing.flip_duration, 0.8);
        assert_eq!(config.snowfall.flake_count, MAX_FLAKES);
    }

    #[test]
    fn non_finite_durations_fall_back_to_defaults() {
        let timing = TimingConfig {
            flip_duration: f64::NAN,
            tilt_reset: f64::INFINITY,
            ..TimingConfig::default()
        }
        .sanitized();

        assert_eq!(timing, TimingConfig::default());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = SiteConfig::from_json_str("{ timing").unwrap_err();
        assert!(matches!(err, crate::SiteError::Config(_)));
    }
}
