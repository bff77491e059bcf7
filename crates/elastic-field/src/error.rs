#![warn(missing_docs)]

//! Error types for the elastic field library.
//!
//! The physics step and the renderer are total functions. The only fallible
//! operation is validating a set of [`FieldParams`](crate::FieldParams)
//! before it is handed to a simulation.

use core::fmt;

/// Errors that can occur when validating field parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Error for invalid grid spacing.
    /// This variant is returned when the spacing is not a positive finite number.
    InvalidSpacing(&'static str),
    /// Error for invalid influence radius.
    /// This variant is returned when the radius is negative or not finite.
    InvalidRadius(&'static str),
    /// Error for an invalid force gain (pull or spring).
    InvalidGain(&'static str),
    /// Error for an invalid damping factor.
    /// This variant is returned when the factor lies outside `[0, 1]`.
    InvalidDamping(&'static str),
    /// Error for an invalid settle threshold.
    InvalidThreshold(&'static str),
    /// Error for an invalid disc radius.
    InvalidDiscRadius(&'static str),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidSpacing(msg) => write!(f, "Invalid grid spacing: {}", msg),
            FieldError::InvalidRadius(msg) => write!(f, "Invalid influence radius: {}", msg),
            FieldError::InvalidGain(msg) => write!(f, "Invalid force gain: {}", msg),
            FieldError::InvalidDamping(msg) => write!(f, "Invalid damping factor: {}", msg),
            FieldError::InvalidThreshold(msg) => write!(f, "Invalid settle threshold: {}", msg),
            FieldError::InvalidDiscRadius(msg) => write!(f, "Invalid disc radius: {}", msg),
        }
    }
}

impl core::error::Error for FieldError {}
