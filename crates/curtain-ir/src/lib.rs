//! Declarative reveal descriptors for curtain pages.
//!
//! `curtain-ir` is the data layer: JSON-serializable descriptions of a
//! page's sections and their reveal behavior, independent of any
//! runtime. The `curtain-core` crate converts these descriptors into
//! live sections when a page is staged.

pub mod error;
pub mod page;

pub use error::PageError;
pub use page::{ChildSpec, PageDocument, SectionId, SectionSpec, StaggerSpec, VariantSpec};
