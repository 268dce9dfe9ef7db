//! Error types for reveal configuration and stage assembly.
//!
//! All validation happens when sections are built: bad timing or
//! threshold values are rejected up front rather than clamped, so a
//! section that builds successfully can never compute a negative delay
//! or wait on an unreachable threshold.

use thiserror::Error;

/// Errors produced while validating reveal configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurtainError {
    /// Visibility thresholds are fractions of the region's area.
    #[error("visibility threshold {0} is outside 0.0..=1.0")]
    ThresholdOutOfRange(f32),

    /// The base delay applies to every child and must be usable as-is.
    #[error("stagger base delay {0}s is negative or not finite")]
    InvalidBaseDelay(f32),

    /// Per-item step in seconds.
    #[error("stagger item step {0}s is negative or not finite")]
    InvalidItemStep(f32),

    /// Per-category step in seconds.
    #[error("stagger category step {0}s is negative or not finite")]
    InvalidCategoryStep(f32),

    /// Stage sections are keyed by name.
    #[error("a section named '{0}' is already on the stage")]
    DuplicateSection(String),
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CurtainError>;
