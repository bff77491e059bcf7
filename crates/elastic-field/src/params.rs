//! Tunable constants of the elastic field.

use crate::error::FieldError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Distance between adjacent rest positions.
pub const DEFAULT_SPACING: f32 = 30.0;
/// Pointer influence distance.
pub const DEFAULT_INFLUENCE_RADIUS: f32 = 150.0;
/// Velocity gain of the pull toward the pointer.
pub const DEFAULT_PULL_GAIN: f32 = 0.05;
/// Velocity gain of the spring toward the rest position.
pub const DEFAULT_SPRING_GAIN: f32 = 0.02;
/// Per-step velocity multiplier.
pub const DEFAULT_DAMPING: f32 = 0.95;
/// Per-axis distance from home under which a free point snaps back to white.
pub const DEFAULT_SETTLE_THRESHOLD: f32 = 1.0;
/// Radius of the disc drawn for every point.
pub const DEFAULT_DISC_RADIUS: f32 = 100.0;

/// Parameters shared by the grid builder, the physics step and the renderer.
///
/// `Default` yields the compiled-in constants above. Every field can be
/// overridden when the `serde` feature is enabled; missing fields fall back
/// to their defaults.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParams {
    /// Lattice spacing in surface units.
    pub spacing: f32,
    /// Maximum pointer distance at which the pull applies. Zero disables it.
    pub influence_radius: f32,
    /// Pull gain applied to the point-to-pointer vector.
    pub pull_gain: f32,
    /// Spring gain applied to the point-to-home vector.
    pub spring_gain: f32,
    /// Velocity damping factor, in `[0, 1]`.
    pub damping: f32,
    /// Settle distance, per axis.
    pub settle_threshold: f32,
    /// Rendered disc radius.
    pub disc_radius: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        FieldParams {
            spacing: DEFAULT_SPACING,
            influence_radius: DEFAULT_INFLUENCE_RADIUS,
            pull_gain: DEFAULT_PULL_GAIN,
            spring_gain: DEFAULT_SPRING_GAIN,
            damping: DEFAULT_DAMPING,
            settle_threshold: DEFAULT_SETTLE_THRESHOLD,
            disc_radius: DEFAULT_DISC_RADIUS,
        }
    }
}

impl FieldParams {
    /// Check that every parameter is finite and within its domain.
    ///
    /// # Errors
    ///
    /// Returns the [`FieldError`] variant of the first offending field.
    pub fn validate(&self) -> Result<(), FieldError> {
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(FieldError::InvalidSpacing("must be positive and finite"));
        }
        if !self.influence_radius.is_finite() || self.influence_radius < 0.0 {
            return Err(FieldError::InvalidRadius("must be non-negative and finite"));
        }
        if !self.pull_gain.is_finite() || self.pull_gain < 0.0 {
            return Err(FieldError::InvalidGain("pull gain must be non-negative and finite"));
        }
        if !self.spring_gain.is_finite() || self.spring_gain < 0.0 {
            return Err(FieldError::InvalidGain("spring gain must be non-negative and finite"));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(FieldError::InvalidDamping("must lie within [0, 1]"));
        }
        if !self.settle_threshold.is_finite() || self.settle_threshold < 0.0 {
            return Err(FieldError::InvalidThreshold("must be non-negative and finite"));
        }
        if !self.disc_radius.is_finite() || self.disc_radius < 0.0 {
            return Err(FieldError::InvalidDiscRadius("must be non-negative and finite"));
        }
        Ok(())
    }
}
