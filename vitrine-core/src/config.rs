//! Runtime configuration for user-adjustable constants
//!
//! [`PagerConfig`] holds `Option<T>` fields that override the compiled
//! defaults in [`crate::constants`]. Accessor methods fall back to the
//! constants when a field is `None`, so an empty config behaves exactly like
//! the built-in tuning.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{gesture, layout, overlay, prefetch, wheel};

/// Errors raised while loading or validating a [`PagerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed into a config.
    #[error("failed to parse pager config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value was parsed but is outside its allowed range.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// Human readable constraint that was violated.
        reason: String,
    },
}

/// Runtime configuration with optional overrides for constants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PagerConfig {
    // ========== LAYOUT ==========
    /// Screen width below which the narrow peek applies (px)
    pub narrow_breakpoint: Option<f32>,
    /// Peek on narrow screens (px)
    pub narrow_page_peek: Option<f32>,
    /// Peek on wide screens (px)
    pub wide_page_peek: Option<f32>,
    /// Gap between pages (px)
    pub page_spacing: Option<f32>,

    // ========== WHEEL ==========
    /// Minimum horizontal wheel delta that can trigger a jump (px)
    pub wheel_threshold: Option<f32>,
    /// Wheel lockout after a jump (ms)
    pub wheel_cooldown_ms: Option<u64>,

    // ========== GESTURES ==========
    /// Deferral before the panning flag clears after a release (ms)
    pub panning_clear_delay_ms: Option<u64>,

    // ========== OVERLAY ==========
    /// Delay between mounting overlay content and revealing it (ms)
    pub overlay_reveal_delay_ms: Option<u64>,

    // ========== LOADING ==========
    /// Pages requested on each side of the current page
    pub prefetch_radius: Option<usize>,
}

impl PagerConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: PagerConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every override against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("narrow_breakpoint", self.narrow_breakpoint)?;
        check_non_negative("narrow_page_peek", self.narrow_page_peek)?;
        check_non_negative("wide_page_peek", self.wide_page_peek)?;
        check_non_negative("page_spacing", self.page_spacing)?;
        check_non_negative("wheel_threshold", self.wheel_threshold)?;
        Ok(())
    }

    pub fn narrow_breakpoint(&self) -> f32 {
        self.narrow_breakpoint
            .unwrap_or(layout::NARROW_SCREEN_BREAKPOINT)
    }

    pub fn narrow_page_peek(&self) -> f32 {
        self.narrow_page_peek.unwrap_or(layout::NARROW_PAGE_PEEK)
    }

    pub fn wide_page_peek(&self) -> f32 {
        self.wide_page_peek.unwrap_or(layout::WIDE_PAGE_PEEK)
    }

    pub fn page_spacing(&self) -> f32 {
        self.page_spacing.unwrap_or(layout::PAGE_SPACING)
    }

    pub fn wheel_threshold(&self) -> f32 {
        self.wheel_threshold.unwrap_or(wheel::NOISE_THRESHOLD)
    }

    pub fn wheel_cooldown(&self) -> Duration {
        Duration::from_millis(
            self.wheel_cooldown_ms.unwrap_or(wheel::COOLDOWN_MS),
        )
    }

    pub fn panning_clear_delay(&self) -> Duration {
        Duration::from_millis(
            self.panning_clear_delay_ms
                .unwrap_or(gesture::PANNING_CLEAR_DELAY_MS),
        )
    }

    pub fn overlay_reveal_delay(&self) -> Duration {
        Duration::from_millis(
            self.overlay_reveal_delay_ms
                .unwrap_or(overlay::REVEAL_DELAY_MS),
        )
    }

    pub fn prefetch_radius(&self) -> usize {
        self.prefetch_radius.unwrap_or(prefetch::RADIUS)
    }
}

fn check_non_negative(
    field: &'static str,
    value: Option<f32>,
) -> Result<(), ConfigError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(ConfigError::Invalid {
            field,
            reason: format!("expected a finite value >= 0, got {v}"),
        }),
        _ => Ok(()),
    }
}

fn check_positive(
    field: &'static str,
    value: Option<f32>,
) -> Result<(), ConfigError> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(ConfigError::Invalid {
            field,
            reason: format!("expected a finite value > 0, got {v}"),
        }),
        _ => Ok(()),
    }
}
