//! About section: summary panel, highlight list, info cards.
//!
//! Three category buckets stagger the panels one step apart while the
//! highlight items inside the second panel keep their own item rhythm.

use curtain_ir::{ChildSpec, SectionSpec, StaggerSpec, VariantSpec};

const HIGHLIGHTS: [&str; 5] = [
    "Project-driven developer with strong hands-on experience",
    "Skilled in modern React ecosystem and TypeScript",
    "Focus on responsive, accessible web applications",
    "Experience with full-stack development and CRUD operations",
    "Passionate about clean, scalable code and modern dev practices",
];

pub fn section() -> SectionSpec {
    let mut spec = SectionSpec::new("about")
        .with_title("About Me")
        .with_threshold(0.3)
        .with_stagger(
            StaggerSpec::new(0.2)
                .with_item_step(0.1)
                .with_category_step(0.2),
        )
        .with_child(ChildSpec::labeled("Professional summary", VariantSpec::FadeLeft).in_category(0));

    for highlight in HIGHLIGHTS {
        spec = spec.with_child(ChildSpec::labeled(highlight, VariantSpec::FadeRight).in_category(1));
    }

    spec.with_child(ChildSpec::labeled("Experience", VariantSpec::FadeUp).in_category(2))
        .with_child(ChildSpec::labeled("Education", VariantSpec::FadeUp).in_category(2))
        .with_child(ChildSpec::labeled("Location", VariantSpec::FadeUp).in_category(2))
}
