//! Viewport-triggered staggered reveals.
//!
//! This crate provides:
//! - **Viewport observation**: one-shot threshold watches over
//!   host-reported visibility
//! - **Reveal latches**: monotonic per-section reveal state
//! - **Stagger scheduling**: deterministic per-child delays
//! - **Style derivation**: pure opacity/pose/delay descriptors
//! - **Stage coordination**: page-level wiring plus reveal events
//!
//! # Architecture
//!
//! ```text
//! Stage
//!   ├── ViewportObserver (RegionId → armed one-shot watch)
//!   ├── RevealSection* (region + latch + stagger config + children)
//!   └── EventQueue (one RevealEvent per section, ever)
//!
//! derive_style()
//!   └── queried per child while painting; nothing is cached
//! ```
//!
//! The crate computes state and delays; it never sleeps or schedules.
//! Hosts feed it [`VisibilitySnapshot`]s from their layout pipeline and
//! consume the delays with whatever transition facility they have.

pub mod error;
pub mod events;
pub mod latch;
pub mod observer;
pub mod section;
pub mod stage;
pub mod stagger;
pub mod style;
pub mod types;

pub use error::{CurtainError, Result};
pub use events::{EventQueue, RevealEvent};
pub use latch::RevealLatch;
pub use observer::{Subscription, ViewportObserver, VisibilitySnapshot};
pub use section::{ChildDef, DEFAULT_THRESHOLD, RevealSection, SectionBuilder, SectionChild};
pub use stage::Stage;
pub use stagger::{StaggerConfig, StaggerItem, delay_for};
pub use style::{derive_style, meter_value};
pub use types::{Region, RegionId, RevealTransform, RevealVariant, StyleDescriptor};
