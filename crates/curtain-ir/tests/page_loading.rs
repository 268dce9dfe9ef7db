use anyhow::Result;
use curtain_ir::{PageDocument, PageError, VariantSpec};

const PORTFOLIO_JSON: &str = r#"{
    "page_id": "portfolio",
    "sections": [
        {
            "id": "hero",
            "threshold": 0.0,
            "stagger": { "base_delay_s": 0.2, "item_step_s": 0.2 },
            "children": [
                { "label": "name" },
                { "label": "role" },
                { "label": "divider", "variant": "scale_in" }
            ]
        },
        {
            "id": "skills",
            "stagger": { "item_step_s": 0.1, "category_step_s": 0.2 },
            "children": [
                { "label": "JavaScript", "category": 0, "meter": 90.0 },
                { "label": "TypeScript", "category": 0, "meter": 85.0 },
                { "label": "React", "category": 1, "meter": 90.0 }
            ]
        }
    ]
}"#;

#[test]
fn loads_page_document_from_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("portfolio.json");
    std::fs::write(&path, PORTFOLIO_JSON)?;

    let document = PageDocument::from_file(&path)?;

    assert_eq!(document.page_id, "portfolio");
    assert_eq!(document.sections.len(), 2);

    let hero = document.section("hero").expect("hero section");
    assert_eq!(hero.threshold, 0.0);
    assert_eq!(hero.stagger.base_delay_s, 0.2);
    assert_eq!(hero.children.len(), 3);
    assert_eq!(hero.children[2].variant, VariantSpec::ScaleIn);

    let skills = document.section("skills").expect("skills section");
    // Absent threshold falls back to the default.
    assert_eq!(skills.threshold, 0.3);
    assert_eq!(skills.children[0].meter, Some(90.0));
    assert_eq!(skills.children[2].category, Some(1));

    Ok(())
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.json");

    let err = PageDocument::from_file(&path).unwrap_err();
    match err {
        PageError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected io error, got {other}"),
    }
}

#[test]
fn written_document_loads_back() -> Result<()> {
    let original = PageDocument::from_json_str(PORTFOLIO_JSON)?;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("round_trip.json");
    std::fs::write(&path, original.to_json_string()?)?;

    let reloaded = PageDocument::from_file(&path)?;
    assert_eq!(original, reloaded);

    Ok(())
}
