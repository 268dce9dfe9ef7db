//! Core value types shared across the reveal runtime.
//!
//! These are the vocabulary the rest of the crate speaks: watched
//! regions plus the poses and style descriptors handed to rendering
//! hosts.

use serde::{Deserialize, Serialize};

use crate::error::{CurtainError, Result};

/// Unique identifier for a watched viewport region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionId(pub u64);

impl RegionId {
    /// Generate a new unique region ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        RegionId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for RegionId {
    fn default() -> Self {
        Self::new()
    }
}

/// A renderable area watched for viewport entry.
///
/// The threshold is the fraction of the region's area (0.0..=1.0) that
/// must be visible before the region counts as entered. A threshold of
/// 0.0 fires on the first visibility pass that reports the region at
/// all, which is how mount-time reveals are expressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    id: RegionId,
    threshold: f32,
}

impl Region {
    /// Create a region with a fresh ID and a validated threshold.
    pub fn new(threshold: f32) -> Result<Self> {
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(CurtainError::ThresholdOutOfRange(threshold));
        }
        Ok(Self {
            id: RegionId::new(),
            threshold,
        })
    }

    /// The region's unique ID, used to key visibility snapshots.
    pub fn id(&self) -> RegionId {
        self.id
    }

    /// Visible fraction required for this region to count as entered.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

/// Hidden-to-visible pose category for a revealed child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealVariant {
    /// Rise into place from 10 units below while fading in.
    #[default]
    FadeUp,
    /// Slide into place from 10 units to the left while fading in.
    FadeLeft,
    /// Slide into place from 10 units to the right while fading in.
    FadeRight,
    /// Grow into place from 95% scale while fading in.
    ScaleIn,
}

impl RevealVariant {
    /// The pose an unrevealed child holds before its transition runs.
    pub fn hidden_pose(self) -> RevealTransform {
        match self {
            Self::FadeUp => RevealTransform::translate(0.0, 10.0),
            Self::FadeLeft => RevealTransform::translate(-10.0, 0.0),
            Self::FadeRight => RevealTransform::translate(10.0, 0.0),
            Self::ScaleIn => RevealTransform::scale(0.95),
        }
    }
}

impl From<curtain_ir::VariantSpec> for RevealVariant {
    fn from(spec: curtain_ir::VariantSpec) -> Self {
        match spec {
            curtain_ir::VariantSpec::FadeUp => Self::FadeUp,
            curtain_ir::VariantSpec::FadeLeft => Self::FadeLeft,
            curtain_ir::VariantSpec::FadeRight => Self::FadeRight,
            curtain_ir::VariantSpec::ScaleIn => Self::ScaleIn,
        }
    }
}

/// Pose offsets for a child, in layout units.
///
/// The default is the identity pose (no offset, full scale), which is
/// also the revealed pose. Y grows downward, matching screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealTransform {
    /// Horizontal offset.
    pub translate_x: f64,
    /// Vertical offset (positive is downward).
    pub translate_y: f64,
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
}

impl Default for RevealTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl RevealTransform {
    /// The no-op pose: zero translation, full scale.
    pub fn identity() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// A pure translation pose.
    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
            ..Self::identity()
        }
    }

    /// A uniform scale pose.
    pub fn scale(factor: f64) -> Self {
        Self {
            scale_x: factor,
            scale_y: factor,
            ..Self::identity()
        }
    }

    /// Whether this pose leaves the child untouched.
    pub fn is_identity(&self) -> bool {
        self.translate_x == 0.0
            && self.translate_y == 0.0
            && self.scale_x == 1.0
            && self.scale_y == 1.0
    }
}

/// Presentation values for a single child, derived on demand.
///
/// Descriptors are never stored; hosts query them each time they paint
/// and install `transition_delay_s` on whatever transition facility
/// they use. The delay is committed in both poses so it is already in
/// place when the reveal flips opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleDescriptor {
    /// Target opacity: 0.0 hidden, 1.0 revealed.
    pub opacity: f32,
    /// Pose offset for the child.
    pub transform: RevealTransform,
    /// Seconds the host waits before starting the child's transition.
    pub transition_delay_s: f32,
}

impl StyleDescriptor {
    /// Whether this descriptor paints the child invisible.
    pub fn is_hidden(&self) -> bool {
        self.opacity == 0.0
    }
}
