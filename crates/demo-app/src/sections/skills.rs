//! Skills grid: four categories of metered skill bars plus a badge row.
//!
//! Each skill carries a meter target; the bar fills to it when the
//! section reveals, on the same stagger as the rest of the grid. The
//! badge row trails the grid as a fifth category.

use curtain_ir::{ChildSpec, SectionSpec, StaggerSpec, VariantSpec};

const CATEGORIES: [(&str, [(&str, f32); 4]); 4] = [
    (
        "Languages",
        [
            ("JavaScript", 90.0),
            ("TypeScript", 85.0),
            ("HTML5", 95.0),
            ("CSS3", 90.0),
        ],
    ),
    (
        "Frameworks & Libraries",
        [
            ("React.js", 90.0),
            ("Next.js", 85.0),
            ("Node.js", 75.0),
            ("Express.js", 70.0),
        ],
    ),
    (
        "Styling & State Management",
        [
            ("Tailwind CSS", 95.0),
            ("ShadCN", 85.0),
            ("Zustand", 80.0),
            ("React Context API", 75.0),
        ],
    ),
    (
        "Tools & Database",
        [
            ("Git & GitHub", 85.0),
            ("Vercel", 90.0),
            ("VS Code", 95.0),
            ("MongoDB", 70.0),
        ],
    ),
];

const BADGES: [&str; 8] = [
    "Zod",
    "Custom Form Validation",
    "REST APIs",
    "Framer Motion",
    "Responsive Design",
    "Cloudinary",
    "CRUD Operations",
    "JWT Authentication",
];

pub fn section() -> SectionSpec {
    let mut spec = SectionSpec::new("skills")
        .with_title("Skills & Technologies")
        .with_threshold(0.3)
        .with_stagger(
            StaggerSpec::new(0.0)
                .with_item_step(0.1)
                .with_category_step(0.2),
        );

    for (category_index, (_, skills)) in CATEGORIES.iter().enumerate() {
        for (name, level) in skills {
            spec = spec.with_child(
                ChildSpec::labeled(*name, VariantSpec::FadeUp)
                    .in_category(category_index)
                    .with_meter(*level),
            );
        }
    }

    for badge in BADGES {
        spec = spec.with_child(
            ChildSpec::labeled(badge, VariantSpec::ScaleIn).in_category(CATEGORIES.len()),
        );
    }

    spec
}
