//! # talenthub-content
//!
//! Typed display content for the TALENTHUB report page.
//!
//! Everything the page shows (nav anchors, feature cards, the tech stack,
//! the sample chart series, the schema illustration, methodology phases,
//! roadmap items) lives here as `const` data. The rendering crate
//! (`talenthub-landing`) consumes these values verbatim; nothing is created,
//! mutated, or destroyed at runtime.
//!
//! The crate is organized into modules:
//!
//! - [`types`] - Value structures for display content
//! - [`page`] - The literal page content, one constant per display surface
//!
//! The SQL in [`page::SCHEMA_DDL`] and [`page::QUERIES_DML`] is illustrative
//! text. It is styled to resemble SQL on the page and is never parsed or
//! executed.

#![warn(missing_docs)]

pub mod page;
pub mod types;

pub use types::{
    ChartPoint, Feature, Icon, Limitation, NavItem, Phase, RoadmapItem, SchemaEntity, SchemaField,
    StatHighlight, TechCategory, TechItem,
};
