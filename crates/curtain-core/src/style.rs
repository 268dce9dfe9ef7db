//! On-demand style derivation.
//!
//! Reveal state lives in latches; presentation is a pure function of
//! that state. Nothing in this module stores anything, so querying a
//! style twice with the same inputs always yields the same descriptor.

use crate::types::{RevealTransform, RevealVariant, StyleDescriptor};

/// Derive the presentation for one child from its section's reveal
/// state plus the child's computed delay and pose variant.
///
/// The delay rides along unchanged in both poses: hosts install it
/// while the child is still hidden, so the stagger is already committed
/// when the reveal flips opacity.
pub fn derive_style(revealed: bool, delay_s: f32, variant: RevealVariant) -> StyleDescriptor {
    let (opacity, transform) = if revealed {
        (1.0, RevealTransform::identity())
    } else {
        (0.0, variant.hidden_pose())
    };
    StyleDescriptor {
        opacity,
        transform,
        transition_delay_s: delay_s,
    }
}

/// Value a meter (a skill bar, for example) shows: zero until the
/// owning section reveals, the full target afterwards. The jump is
/// softened by the host's transition facility, not interpolated here.
pub fn meter_value(revealed: bool, target: f32) -> f32 {
    if revealed { target } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_style_uses_variant_pose() {
        let style = derive_style(false, 0.4, RevealVariant::FadeLeft);
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.transform, RevealTransform::translate(-10.0, 0.0));
        assert_eq!(style.transition_delay_s, 0.4);
    }

    #[test]
    fn test_revealed_style_is_identity() {
        let style = derive_style(true, 0.4, RevealVariant::FadeLeft);
        assert_eq!(style.opacity, 1.0);
        assert!(style.transform.is_identity());
    }

    #[test]
    fn test_delay_survives_both_poses() {
        for variant in [
            RevealVariant::FadeUp,
            RevealVariant::FadeLeft,
            RevealVariant::FadeRight,
            RevealVariant::ScaleIn,
        ] {
            assert_eq!(derive_style(false, 0.9, variant).transition_delay_s, 0.9);
            assert_eq!(derive_style(true, 0.9, variant).transition_delay_s, 0.9);
        }
    }

    #[test]
    fn test_derivation_is_pure() {
        let a = derive_style(false, 0.25, RevealVariant::ScaleIn);
        let b = derive_style(false, 0.25, RevealVariant::ScaleIn);
        assert_eq!(a, b);

        let c = derive_style(true, 0.25, RevealVariant::ScaleIn);
        let d = derive_style(true, 0.25, RevealVariant::ScaleIn);
        assert_eq!(c, d);
    }

    #[test]
    fn test_meter_holds_zero_until_reveal() {
        assert_eq!(meter_value(false, 90.0), 0.0);
        assert_eq!(meter_value(true, 90.0), 90.0);
    }
}
