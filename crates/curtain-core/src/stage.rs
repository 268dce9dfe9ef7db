//! Page-level coordination: one observer, many sections, reveal events.
//!
//! A [`Stage`] is what a host drives. It owns the viewport observer and
//! every section on the page; each visibility pass it delivers queues a
//! [`RevealEvent`] for any section revealing for the first time.
//!
//! # Usage
//!
//! ```ignore
//! use curtain_core::{Stage, VisibilitySnapshot};
//!
//! let mut stage = Stage::from_document(&document)?;
//!
//! // Each layout/scroll pass:
//! let snapshot = compute_visibility(); // host-specific
//! stage.process(&snapshot);
//! for event in stage.drain_events() {
//!     println!("revealed: {}", event.section);
//! }
//! ```

use tracing::debug;

use curtain_ir::PageDocument;

use crate::error::{CurtainError, Result};
use crate::events::{EventQueue, RevealEvent};
use crate::observer::{ViewportObserver, VisibilitySnapshot};
use crate::section::RevealSection;

/// All reveal state for one page.
pub struct Stage {
    observer: ViewportObserver,
    sections: Vec<RevealSection>,
    announced: Vec<bool>,
    events: EventQueue,
}

impl Stage {
    /// Stage backed by a live visibility source.
    pub fn new() -> Self {
        Self::with_observer(ViewportObserver::new())
    }

    /// Stage for hosts without a visibility source: every section added
    /// to it reveals immediately.
    pub fn fail_open() -> Self {
        Self::with_observer(ViewportObserver::fail_open())
    }

    fn with_observer(observer: ViewportObserver) -> Self {
        Self {
            observer,
            sections: Vec::new(),
            announced: Vec::new(),
            events: EventQueue::new(),
        }
    }

    /// Build a live stage holding every section of `document`, in
    /// document order.
    pub fn from_document(document: &PageDocument) -> Result<Self> {
        let mut stage = Self::new();
        stage.add_document(document)?;
        Ok(stage)
    }

    /// Add every section of `document`, in document order.
    pub fn add_document(&mut self, document: &PageDocument) -> Result<()> {
        for spec in &document.sections {
            self.add_section(RevealSection::from_spec(spec)?)?;
        }
        Ok(())
    }

    /// Attach `section` to the stage's observer and take ownership of
    /// it. Section names must be unique on a stage.
    ///
    /// On a fail-open stage the section reveals during this call and
    /// its event is queued right away.
    pub fn add_section(&mut self, mut section: RevealSection) -> Result<()> {
        if self.section(section.name()).is_some() {
            return Err(CurtainError::DuplicateSection(section.name().to_string()));
        }
        section.attach(&mut self.observer);
        debug!(section = %section.name(), "section staged");
        self.sections.push(section);
        self.announced.push(false);
        self.announce_new();
        Ok(())
    }

    /// Detach and remove a section by name, returning it.
    pub fn remove_section(&mut self, name: &str) -> Option<RevealSection> {
        let position = self.sections.iter().position(|s| s.name() == name)?;
        let mut section = self.sections.remove(position);
        self.announced.remove(position);
        section.detach(&mut self.observer);
        Some(section)
    }

    /// Deliver one visibility pass to every armed watch, then queue
    /// events for sections that revealed since the last call.
    pub fn process(&mut self, snapshot: &VisibilitySnapshot) {
        self.observer.process(snapshot);
        self.announce_new();
    }

    fn announce_new(&mut self) {
        for (index, section) in self.sections.iter().enumerate() {
            if section.is_revealed() && !self.announced[index] {
                self.announced[index] = true;
                self.events.push(RevealEvent {
                    section: section.name().to_string(),
                    region: section.region().id(),
                });
            }
        }
    }

    /// Take all pending reveal events, oldest first.
    pub fn drain_events(&mut self) -> Vec<RevealEvent> {
        self.events.drain().collect()
    }

    /// Number of events waiting to be drained.
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Look up a section by name.
    pub fn section(&self, name: &str) -> Option<&RevealSection> {
        self.sections.iter().find(|s| s.name() == name)
    }

    /// All sections, in the order they were added.
    pub fn sections(&self) -> &[RevealSection] {
        &self.sections
    }

    /// Number of sections on the stage.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of sections that have revealed so far.
    pub fn revealed_count(&self) -> usize {
        self.sections.iter().filter(|s| s.is_revealed()).count()
    }

    /// Whether every section on the stage has revealed.
    pub fn is_fully_revealed(&self) -> bool {
        self.sections.iter().all(|s| s.is_revealed())
    }

    /// Read-only view of the underlying observer.
    pub fn observer(&self) -> &ViewportObserver {
        &self.observer
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::ChildDef;
    use crate::stagger::StaggerConfig;
    use crate::types::RevealVariant;

    fn section(name: &str, threshold: f32) -> RevealSection {
        RevealSection::builder(name)
            .threshold(threshold)
            .stagger(StaggerConfig::new(0.2).with_item_step(0.1))
            .child(ChildDef::new(RevealVariant::FadeUp))
            .child(ChildDef::new(RevealVariant::FadeUp))
            .build()
            .unwrap()
    }

    fn snapshot_for(stage: &Stage, fractions: &[(&str, f32)]) -> VisibilitySnapshot {
        let mut snapshot = VisibilitySnapshot::new();
        for (name, fraction) in fractions {
            let region = stage.section(name).unwrap().region();
            snapshot.record(region.id(), *fraction);
        }
        snapshot
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut stage = Stage::new();
        stage.add_section(section("hero", 0.0)).unwrap();

        let err = stage.add_section(section("hero", 0.3)).unwrap_err();
        assert!(matches!(err, CurtainError::DuplicateSection(_)));
        assert_eq!(stage.section_count(), 1);
    }

    #[test]
    fn test_sections_reveal_independently() {
        let mut stage = Stage::new();
        stage.add_section(section("about", 0.3)).unwrap();
        stage.add_section(section("skills", 0.3)).unwrap();

        let snapshot = snapshot_for(&stage, &[("about", 0.5), ("skills", 0.1)]);
        stage.process(&snapshot);

        assert!(stage.section("about").unwrap().is_revealed());
        assert!(!stage.section("skills").unwrap().is_revealed());
        assert_eq!(stage.revealed_count(), 1);
        assert!(!stage.is_fully_revealed());
    }

    #[test]
    fn test_one_event_per_section() {
        let mut stage = Stage::new();
        stage.add_section(section("about", 0.3)).unwrap();

        let snapshot = snapshot_for(&stage, &[("about", 0.9)]);
        stage.process(&snapshot);
        stage.process(&snapshot);

        let events = stage.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].section, "about");
        assert_eq!(
            events[0].region,
            stage.section("about").unwrap().region().id()
        );

        // Nothing new on subsequent passes.
        stage.process(&snapshot);
        assert_eq!(stage.pending_events(), 0);
    }

    #[test]
    fn test_events_follow_section_order() {
        let mut stage = Stage::new();
        stage.add_section(section("hero", 0.0)).unwrap();
        stage.add_section(section("about", 0.3)).unwrap();

        let snapshot = snapshot_for(&stage, &[("hero", 0.2), ("about", 0.8)]);
        stage.process(&snapshot);

        let names: Vec<String> = stage.drain_events().into_iter().map(|e| e.section).collect();
        assert_eq!(names, vec!["hero", "about"]);
    }

    #[test]
    fn test_fail_open_stage_reveals_on_add() {
        let mut stage = Stage::fail_open();
        stage.add_section(section("contact", 0.3)).unwrap();

        assert!(stage.is_fully_revealed());
        assert_eq!(stage.observer().watch_count(), 0);

        // The event is queued without any process() call.
        let events = stage.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].section, "contact");
    }

    #[test]
    fn test_remove_section_disarms_watch() {
        let mut stage = Stage::new();
        stage.add_section(section("projects", 0.2)).unwrap();
        assert_eq!(stage.observer().watch_count(), 1);

        let snapshot = snapshot_for(&stage, &[("projects", 1.0)]);
        let removed = stage.remove_section("projects").unwrap();
        assert_eq!(stage.observer().watch_count(), 0);

        // The old snapshot can no longer reach the removed section.
        stage.process(&snapshot);
        assert!(!removed.is_revealed());
        assert!(stage.drain_events().is_empty());

        assert!(stage.remove_section("projects").is_none());
    }

    #[test]
    fn test_full_reveal_over_multiple_passes() {
        let mut stage = Stage::new();
        stage.add_section(section("hero", 0.0)).unwrap();
        stage.add_section(section("about", 0.3)).unwrap();
        stage.add_section(section("contact", 0.3)).unwrap();

        let pass = snapshot_for(&stage, &[("hero", 1.0), ("about", 0.0), ("contact", 0.0)]);
        stage.process(&pass);
        assert_eq!(stage.revealed_count(), 1);

        let pass = snapshot_for(&stage, &[("about", 0.4), ("contact", 0.1)]);
        stage.process(&pass);
        assert_eq!(stage.revealed_count(), 2);

        let pass = snapshot_for(&stage, &[("contact", 0.35)]);
        stage.process(&pass);
        assert!(stage.is_fully_revealed());
        assert_eq!(stage.drain_events().len(), 3);
    }
}
