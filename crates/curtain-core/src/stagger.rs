//! Stagger scheduling: deterministic per-child reveal delays.
//!
//! Delays are data, not timers. The scheduler computes how long each
//! child waits after its section reveals; actually honoring the wait is
//! the rendering host's job. Nothing here sleeps or schedules.

use serde::{Deserialize, Serialize};

use crate::error::{CurtainError, Result};

/// Position of a child within a section's ordered sequence.
///
/// `category` selects the outer level of a two-level sequence (a column
/// of grouped cards, for example); flat sections leave it `None`, which
/// the delay formula treats as category zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaggerItem {
    /// Zero-based position within the (inner) sequence.
    pub index: usize,
    /// Zero-based outer grouping, if the section nests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<usize>,
}

impl StaggerItem {
    /// Item at `index` in a flat sequence.
    pub fn nth(index: usize) -> Self {
        Self {
            index,
            category: None,
        }
    }

    /// Item at `index` within the `category`-th group.
    pub fn nth_in(category: usize, index: usize) -> Self {
        Self {
            index,
            category: Some(category),
        }
    }
}

/// Per-section stagger timing. All values are seconds.
///
/// A config is shared by every child of its section and is immutable
/// once the section is built. Absent fields deserialize to zero, which
/// disables that term of the delay formula.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StaggerConfig {
    /// Delay applied to every child of the section.
    #[serde(default)]
    pub base_delay_s: f32,
    /// Additional delay per item index.
    #[serde(default)]
    pub item_step_s: f32,
    /// Additional delay per category index.
    #[serde(default)]
    pub category_step_s: f32,
}

impl StaggerConfig {
    /// Config with only a base delay; steps default to zero.
    pub fn new(base_delay_s: f32) -> Self {
        Self {
            base_delay_s,
            ..Self::default()
        }
    }

    /// Set the per-item step.
    pub fn with_item_step(mut self, step_s: f32) -> Self {
        self.item_step_s = step_s;
        self
    }

    /// Set the per-category step.
    pub fn with_category_step(mut self, step_s: f32) -> Self {
        self.category_step_s = step_s;
        self
    }

    /// Reject negative or non-finite timing instead of clamping it.
    ///
    /// A validated config makes every delay the formula can produce
    /// finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.base_delay_s.is_finite() || self.base_delay_s < 0.0 {
            return Err(CurtainError::InvalidBaseDelay(self.base_delay_s));
        }
        if !self.item_step_s.is_finite() || self.item_step_s < 0.0 {
            return Err(CurtainError::InvalidItemStep(self.item_step_s));
        }
        if !self.category_step_s.is_finite() || self.category_step_s < 0.0 {
            return Err(CurtainError::InvalidCategoryStep(self.category_step_s));
        }
        Ok(())
    }
}

impl From<curtain_ir::StaggerSpec> for StaggerConfig {
    fn from(spec: curtain_ir::StaggerSpec) -> Self {
        Self {
            base_delay_s: spec.base_delay_s,
            item_step_s: spec.item_step_s,
            category_step_s: spec.category_step_s,
        }
    }
}

/// Seconds `item` waits before starting its transition, per `config`.
///
/// `delay = base + index * item_step + category * category_step`, with
/// a missing category contributing nothing. For a validated config the
/// result is non-negative and non-decreasing in both indices.
pub fn delay_for(item: StaggerItem, config: &StaggerConfig) -> f32 {
    let category = item.category.unwrap_or(0);
    config.base_delay_s
        + item.index as f32 * config.item_step_s
        + category as f32 * config.category_step_s
}
