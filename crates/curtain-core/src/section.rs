//! Per-section reveal state: one watched region, one latch, one stagger
//! config, and the section's ordered children.
//!
//! Every page section is an instance of [`RevealSection`]; what differs
//! between a hero banner and a skills grid is data (threshold, timing,
//! children), not code. Sections are built either programmatically via
//! [`SectionBuilder`] or from the declarative `curtain-ir` descriptors
//! via [`RevealSection::from_spec`].

use std::sync::Arc;

use tracing::debug;

use curtain_ir::SectionSpec;

use crate::error::Result;
use crate::latch::RevealLatch;
use crate::observer::{Subscription, ViewportObserver};
use crate::stagger::{StaggerConfig, StaggerItem, delay_for};
use crate::style::{derive_style, meter_value};
use crate::types::{Region, RevealVariant, StyleDescriptor};

/// Declarative description of one child, accepted by
/// [`SectionBuilder::child`].
#[derive(Debug, Clone)]
pub struct ChildDef {
    variant: RevealVariant,
    label: Option<String>,
    category: Option<usize>,
    meter_target: Option<f32>,
}

impl ChildDef {
    /// Child with a pose variant and nothing else.
    pub fn new(variant: RevealVariant) -> Self {
        Self {
            variant,
            label: None,
            category: None,
            meter_target: None,
        }
    }

    /// Child with a display label.
    pub fn labeled(label: impl Into<String>, variant: RevealVariant) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::new(variant)
        }
    }

    /// Place the child in the `category`-th group of the section.
    pub fn in_category(mut self, category: usize) -> Self {
        self.category = Some(category);
        self
    }

    /// Give the child a meter that fills to `target` on reveal.
    pub fn with_meter(mut self, target: f32) -> Self {
        self.meter_target = Some(target);
        self
    }
}

/// One reveal-driven child of a built section.
#[derive(Debug, Clone)]
pub struct SectionChild {
    /// Optional display label carried through for hosts.
    pub label: Option<String>,
    /// Hidden-to-visible pose category.
    pub variant: RevealVariant,
    /// Position used by the stagger scheduler.
    pub item: StaggerItem,
    /// Fill target for children that carry a meter.
    pub meter_target: Option<f32>,
}

/// Builder for [`RevealSection`]. Children keep insertion order; each
/// child's stagger index counts earlier children of the same category
/// bucket, so groups restart their item stagger the way nested lists
/// on a page do.
#[derive(Debug, Clone)]
pub struct SectionBuilder {
    name: String,
    threshold: f32,
    stagger: StaggerConfig,
    children: Vec<SectionChild>,
}

/// Fraction of a section that must scroll into view by default.
pub const DEFAULT_THRESHOLD: f32 = 0.3;

impl SectionBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            threshold: DEFAULT_THRESHOLD,
            stagger: StaggerConfig::default(),
            children: Vec::new(),
        }
    }

    /// Visible fraction required before the section reveals.
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Stagger timing shared by all of the section's children.
    pub fn stagger(mut self, config: StaggerConfig) -> Self {
        self.stagger = config;
        self
    }

    /// Append a child. Its index is its position within its category
    /// bucket at the time of the call.
    pub fn child(mut self, def: ChildDef) -> Self {
        let index = self
            .children
            .iter()
            .filter(|existing| existing.item.category == def.category)
            .count();
        let item = match def.category {
            Some(category) => StaggerItem::nth_in(category, index),
            None => StaggerItem::nth(index),
        };
        self.children.push(SectionChild {
            label: def.label,
            variant: def.variant,
            item,
            meter_target: def.meter_target,
        });
        self
    }

    /// Validate the configuration and produce an unrevealed section.
    ///
    /// Rejects out-of-range thresholds and negative or non-finite
    /// stagger timing; nothing is clamped.
    pub fn build(self) -> Result<RevealSection> {
        self.stagger.validate()?;
        let region = Region::new(self.threshold)?;
        debug!(
            section = %self.name,
            children = self.children.len(),
            threshold = self.threshold,
            "section built"
        );
        Ok(RevealSection {
            name: self.name,
            region,
            stagger: self.stagger,
            children: self.children,
            latch: Arc::new(RevealLatch::new()),
            subscription: None,
        })
    }
}

/// A page section that reveals once its region enters the viewport.
///
/// The section owns its [`Region`] and its latch for its whole
/// lifetime. While attached, the observer holds a callback that shares
/// the latch; detaching removes that callback, after which the latch
/// can never change again.
pub struct RevealSection {
    name: String,
    region: Region,
    stagger: StaggerConfig,
    children: Vec<SectionChild>,
    latch: Arc<RevealLatch>,
    subscription: Option<Subscription>,
}

impl RevealSection {
    /// Start building a section with the default threshold and zeroed
    /// stagger timing.
    pub fn builder(name: impl Into<String>) -> SectionBuilder {
        SectionBuilder::new(name)
    }

    /// Build a section from its declarative descriptor.
    pub fn from_spec(spec: &SectionSpec) -> Result<Self> {
        let mut builder = Self::builder(spec.id.clone())
            .threshold(spec.threshold)
            .stagger(StaggerConfig::from(spec.stagger));
        for child in &spec.children {
            let mut def = match &child.label {
                Some(label) => ChildDef::labeled(label.clone(), child.variant.into()),
                None => ChildDef::new(child.variant.into()),
            };
            if let Some(category) = child.category {
                def = def.in_category(category);
            }
            if let Some(target) = child.meter {
                def = def.with_meter(target);
            }
            builder = builder.child(def);
        }
        builder.build()
    }

    /// The section's name (unique within a stage).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The region this section watches.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Whether the section has entered the viewport.
    pub fn is_revealed(&self) -> bool {
        self.latch.is_revealed()
    }

    /// Whether the section currently holds a subscription.
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Arm the section's watch on `observer`. The entry callback
    /// captures only the section's latch. No-op when already attached
    /// or already revealed.
    pub fn attach(&mut self, observer: &mut ViewportObserver) {
        if self.subscription.is_some() || self.is_revealed() {
            return;
        }
        let latch = Arc::clone(&self.latch);
        self.subscription = Some(observer.observe(&self.region, move || latch.on_enter()));
    }

    /// Cancel the section's watch. Idempotent; once this returns, the
    /// observer can no longer flip the latch.
    pub fn detach(&mut self, observer: &mut ViewportObserver) {
        if let Some(subscription) = self.subscription.take() {
            observer.unsubscribe(&subscription);
        }
    }

    /// The section's children, in insertion order.
    pub fn children(&self) -> &[SectionChild] {
        &self.children
    }

    /// Number of children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Whether the section has no children. Such a section is valid and
    /// reveals with nothing to stagger.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Seconds the `index`-th child waits after the section reveals.
    pub fn child_delay(&self, index: usize) -> Option<f32> {
        self.children
            .get(index)
            .map(|child| delay_for(child.item, &self.stagger))
    }

    /// Style for the `index`-th child, derived fresh from the latch.
    pub fn style_at(&self, index: usize) -> Option<StyleDescriptor> {
        self.children.get(index).map(|child| {
            derive_style(
                self.is_revealed(),
                delay_for(child.item, &self.stagger),
                child.variant,
            )
        })
    }

    /// Styles for all children, in child order.
    pub fn child_styles(&self) -> Vec<StyleDescriptor> {
        (0..self.children.len())
            .filter_map(|index| self.style_at(index))
            .collect()
    }

    /// Current meter value for the `index`-th child, if it carries one:
    /// zero until the section reveals, the target afterwards.
    pub fn meter_at(&self, index: usize) -> Option<f32> {
        self.children
            .get(index)
            .and_then(|child| child.meter_target)
            .map(|target| meter_value(self.is_revealed(), target))
    }
}
