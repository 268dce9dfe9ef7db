//! Serialization-focused page descriptors.
//!
//! These types describe *what* a page reveals: its sections, each
//! section's threshold and stagger timing, and the ordered children
//! with their pose variants. They carry no runtime state; the reveal
//! runtime converts them into its own types when a page is staged.
//! Documents round-trip through JSON so pages can be authored by hand,
//! generated, or shipped across a process boundary.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::PageError;

/// Section identifiers are strings, unique within a document.
pub type SectionId = String;

/// Hidden-pose category for one child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantSpec {
    /// Rise into place from below.
    #[default]
    FadeUp,
    /// Slide into place from the left.
    FadeLeft,
    /// Slide into place from the right.
    FadeRight,
    /// Grow into place from a slight shrink.
    ScaleIn,
}

/// Stagger timing for one section, in seconds. Absent fields mean zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StaggerSpec {
    /// Delay applied to every child.
    #[serde(default)]
    pub base_delay_s: f32,
    /// Additional delay per item index.
    #[serde(default)]
    pub item_step_s: f32,
    /// Additional delay per category index.
    #[serde(default)]
    pub category_step_s: f32,
}

impl StaggerSpec {
    /// Timing with only a base delay.
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
}

/// One reveal-driven child of a section.
///
/// Children are ordered; a child's stagger index is its position among
/// the children of the same category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildSpec {
    /// Optional display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Pose variant; defaults to fade-up.
    #[serde(default)]
    pub variant: VariantSpec,
    /// Outer grouping for two-level sections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<usize>,
    /// Meter fill target (a percentage, for example) reached on reveal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meter: Option<f32>,
}

impl ChildSpec {
    /// Child with a pose variant and nothing else.
    pub fn new(variant: VariantSpec) -> Self {
        Self {
            label: None,
            variant,
            category: None,
            meter: None,
        }
    }

    /// Child with a display label.
    pub fn labeled(label: impl Into<String>, variant: VariantSpec) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::new(variant)
        }
    }

    /// Place the child in the `category`-th group.
    pub fn in_category(mut self, category: usize) -> Self {
        self.category = Some(category);
        self
    }

    /// Give the child a meter that fills to `target` on reveal.
    pub fn with_meter(mut self, target: f32) -> Self {
        self.meter = Some(target);
        self
    }
}

/// One page section and its reveal configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    /// Unique section id, also used as its display name.
    pub id: SectionId,
    /// Optional human-readable heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Fraction of the section that must be visible to reveal it.
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    /// Per-section stagger timing.
    #[serde(default)]
    pub stagger: StaggerSpec,
    /// Ordered children.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ChildSpec>,
}

fn default_threshold() -> f32 {
    0.3
}

impl SectionSpec {
    /// Section with the default threshold, zero stagger, no children.
    pub fn new(id: impl Into<SectionId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            threshold: default_threshold(),
            stagger: StaggerSpec::default(),
            children: Vec::new(),
        }
    }

    /// Set the human-readable heading.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the visibility threshold.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the stagger timing.
    pub fn with_stagger(mut self, stagger: StaggerSpec) -> Self {
        self.stagger = stagger;
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: ChildSpec) -> Self {
        self.children.push(child);
        self
    }
}

/// A full page: ordered sections, each revealed independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    /// Identifier for the page.
    pub page_id: String,
    /// Sections in page order, top to bottom.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<SectionSpec>,
}

impl PageDocument {
    /// Empty page with the given id.
    pub fn new(page_id: impl Into<String>) -> Self {
        Self {
            page_id: page_id.into(),
            sections: Vec::new(),
        }
    }

    /// Append a section.
    pub fn with_section(mut self, section: SectionSpec) -> Self {
        self.sections.push(section);
        self
    }

    /// Look up a section by id.
    pub fn section(&self, id: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Parse a document from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, PageError> {
        let document: Self = serde_json::from_str(json)?;
        debug!(
            page = %document.page_id,
            sections = document.sections.len(),
            "page document parsed"
        );
        Ok(document)
    }

    /// Load a document from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, PageError> {
        let json = std::fs::read_to_string(path).map_err(|source| PageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Serialize the document as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, PageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
