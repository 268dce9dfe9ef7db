//! Featured projects: three cards and a trailing call-to-action.

use curtain_ir::{ChildSpec, SectionSpec, StaggerSpec, VariantSpec};

pub fn section() -> SectionSpec {
    SectionSpec::new("projects")
        .with_title("Featured Projects")
        .with_threshold(0.2)
        .with_stagger(StaggerSpec::new(0.2).with_item_step(0.2))
        .with_child(ChildSpec::labeled(
            "PlumTech E-commerce Store",
            VariantSpec::FadeUp,
        ))
        .with_child(ChildSpec::labeled(
            "FitTrakr Fitness Tracker App",
            VariantSpec::FadeUp,
        ))
        .with_child(ChildSpec::labeled("DevLinkVault", VariantSpec::FadeUp))
        .with_child(ChildSpec::labeled(
            "View GitHub Profile",
            VariantSpec::FadeUp,
        ))
}
