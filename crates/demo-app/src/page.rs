//! Simulated page geometry.
//!
//! A real host computes per-region visible fractions from its layout
//! and scroll state; this module plays that role for the text demo by
//! stacking sections vertically and intersecting them with a scrolling
//! viewport window.

use curtain_core::{RegionId, Stage, VisibilitySnapshot};

/// Height every section gets before its children are counted.
const SECTION_BASE_HEIGHT: f32 = 320.0;
/// Extra height per child.
const CHILD_ROW_HEIGHT: f32 = 48.0;

#[derive(Debug, Clone)]
struct LayoutRow {
    name: String,
    region: RegionId,
    top: f32,
    height: f32,
}

/// Staged sections stacked top to bottom.
#[derive(Debug, Clone)]
pub struct PageLayout {
    rows: Vec<LayoutRow>,
    page_height: f32,
}

impl PageLayout {
    /// Stack every staged section, sizing each by its child count.
    pub fn from_stage(stage: &Stage) -> Self {
        let mut rows = Vec::new();
        let mut cursor = 0.0;
        for section in stage.sections() {
            let height = SECTION_BASE_HEIGHT + CHILD_ROW_HEIGHT * section.child_count() as f32;
            rows.push(LayoutRow {
                name: section.name().to_string(),
                region: section.region().id(),
                top: cursor,
                height,
            });
            cursor += height;
        }
        Self {
            rows,
            page_height: cursor,
        }
    }

    /// Total height of the stacked page.
    pub fn page_height(&self) -> f32 {
        self.page_height
    }

    /// Top offset of a named section.
    pub fn top_of(&self, name: &str) -> Option<f32> {
        self.rows.iter().find(|row| row.name == name).map(|row| row.top)
    }

    /// Visible fraction of every section for a viewport window starting
    /// at `scroll_top`.
    pub fn snapshot(&self, scroll_top: f32, viewport_height: f32) -> VisibilitySnapshot {
        let viewport_bottom = scroll_top + viewport_height;
        let mut snapshot = VisibilitySnapshot::new();
        for row in &self.rows {
            let visible_top = row.top.max(scroll_top);
            let visible_bottom = (row.top + row.height).min(viewport_bottom);
            let visible = (visible_bottom - visible_top).max(0.0);
            snapshot.record(row.region, visible / row.height);
        }
        snapshot
    }
}
