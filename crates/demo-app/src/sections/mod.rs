//! Built-in portfolio page content as declarative section descriptors.
//!
//! Each module describes one page section: its threshold, stagger
//! timing, and children. The demo stages these unless a page document
//! is supplied via config.

pub mod about;
pub mod contact;
pub mod hero;
pub mod projects;
pub mod skills;

use curtain_ir::PageDocument;

/// The built-in portfolio page, sections in page order.
pub fn portfolio() -> PageDocument {
    PageDocument::new("portfolio")
        .with_section(hero::section())
        .with_section(about::section())
        .with_section(skills::section())
        .with_section(projects::section())
        .with_section(contact::section())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_page_shape() {
        let page = portfolio();
        let ids: Vec<&str> = page.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["hero", "about", "skills", "projects", "contact"]);

        // Only the hero reveals on the first pass.
        assert_eq!(page.section("hero").unwrap().threshold, 0.0);
        assert_eq!(page.section("projects").unwrap().threshold, 0.2);

        // Every skill bar carries a meter target; badges do not.
        let skills = page.section("skills").unwrap();
        let metered = skills.children.iter().filter(|c| c.meter.is_some()).count();
        assert_eq!(metered, 16);
        assert_eq!(skills.children.len(), 24);
    }

    #[test]
    fn test_portfolio_sections_build() {
        use curtain_core::RevealSection;

        for spec in &portfolio().sections {
            assert!(
                RevealSection::from_spec(spec).is_ok(),
                "section '{}' failed to build",
                spec.id
            );
        }
    }
}
