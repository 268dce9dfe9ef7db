//! Hero banner.
//!
//! The hero reveals on the first layout pass rather than on scroll, so
//! its threshold is zero: any visibility report at all, including a
//! fully offscreen one, counts as entry.

use curtain_ir::{ChildSpec, SectionSpec, StaggerSpec, VariantSpec};

pub fn section() -> SectionSpec {
    SectionSpec::new("hero")
        .with_title("Alex Rivera")
        .with_threshold(0.0)
        .with_stagger(StaggerSpec::new(0.2).with_item_step(0.2))
        .with_child(ChildSpec::labeled("Alex Rivera", VariantSpec::FadeUp))
        .with_child(ChildSpec::labeled("Frontend Developer", VariantSpec::FadeUp))
        .with_child(ChildSpec::labeled("divider", VariantSpec::ScaleIn))
        .with_child(ChildSpec::labeled("Portland, OR", VariantSpec::FadeUp))
        .with_child(ChildSpec::labeled(
            "Building responsive, accessible, visually engaging applications",
            VariantSpec::FadeUp,
        ))
        .with_child(ChildSpec::labeled("View My Work", VariantSpec::FadeUp))
}
