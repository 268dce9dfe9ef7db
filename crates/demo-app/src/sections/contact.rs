//! Contact section: reach-out methods on the left, social links on the
//! right, and a closing call-to-action card.

use curtain_ir::{ChildSpec, SectionSpec, StaggerSpec, VariantSpec};

const METHODS: [&str; 3] = ["Email", "Phone", "Location"];
const SOCIALS: [&str; 3] = ["GitHub", "LinkedIn", "Email"];

pub fn section() -> SectionSpec {
    let mut spec = SectionSpec::new("contact")
        .with_title("Get In Touch")
        .with_threshold(0.3)
        .with_stagger(
            StaggerSpec::new(0.4)
                .with_item_step(0.1)
                .with_category_step(0.2),
        );

    for method in METHODS {
        spec = spec.with_child(ChildSpec::labeled(method, VariantSpec::FadeLeft).in_category(0));
    }
    for social in SOCIALS {
        spec = spec.with_child(ChildSpec::labeled(social, VariantSpec::FadeRight).in_category(1));
    }

    spec.with_child(
        ChildSpec::labeled("Start a conversation", VariantSpec::ScaleIn).in_category(2),
    )
}
