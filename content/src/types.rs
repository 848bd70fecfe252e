//! Value structures for the page's display content.
//!
//! These types carry literal, session-immutable content from [`crate::page`]
//! into the rendering components. They're designed to be:
//!
//! - **`'static`** - All fields borrow string literals; constants copy freely
//! - **Serializable** - Easy JSON export via serde
//! - **Comparison-friendly** - `PartialEq`/`Eq` so tests can assert on them
//!
//! There is no validation and no referential integrity to enforce: every
//! value is rendered exactly as given.

use serde::Serialize;

/// Decorative icon identifier.
///
/// The landing crate maps each variant to an inline SVG path. Which glyph a
/// variant resolves to is purely cosmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Icon {
    /// Dashboard panels
    Layout,
    /// Shield with a check mark
    ShieldCheck,
    /// Processor chip
    Cpu,
    /// Lightning bolt
    Zap,
    /// Stacked layers
    Layers,
    /// Database cylinder
    Database,
    /// Server racks
    Server,
    /// Angle brackets with slash
    Code,
    /// Two user silhouettes
    Users,
    /// Single user in a circle
    UserCircle,
    /// Medal
    Award,
    /// Calendar page
    Calendar,
    /// Terminal window
    Terminal,
    /// Sealed package
    Package,
    /// Arrow pointing right
    ArrowRight,
    /// Check mark in a circle
    CheckCircle,
    /// Warning triangle
    Warning,
}

/// A navbar entry: button label plus the anchor element it scrolls to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Anchor element id (scroll target)
    pub id: &'static str,
    /// Button label
    pub label: &'static str,
}

/// A feature card on the overview grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Card icon
    pub icon: Icon,
    /// Card title
    pub title: &'static str,
    /// Card body copy
    pub desc: &'static str,
}

/// Category label for a technology tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TechCategory {
    /// UI framework
    Frontend,
    /// CSS tooling
    Styling,
    /// ORM / data access
    Database,
    /// Persistence engine
    Storage,
    /// Server-side runtime
    Backend,
    /// Motion library
    Animation,
}

impl TechCategory {
    /// Uppercase-ready display label.
    pub fn label(self) -> &'static str {
        match self {
            TechCategory::Frontend => "Frontend",
            TechCategory::Styling => "Styling",
            TechCategory::Database => "Database",
            TechCategory::Storage => "Storage",
            TechCategory::Backend => "Backend",
            TechCategory::Animation => "Animation",
        }
    }
}

/// A technology tile in the architecture section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TechItem {
    /// Product name as displayed
    pub name: &'static str,
    /// Fixed category
    pub category: TechCategory,
    /// Decorative tile icon
    pub icon: Icon,
}

/// One step of the development-methodology timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Phase {
    /// Zero-padded ordinal, e.g. "01"
    pub number: &'static str,
    /// Phase title
    pub title: &'static str,
    /// Phase summary
    pub description: &'static str,
    /// Ordered deliverable tags
    pub items: &'static [&'static str],
}

/// One point of the sample applications-per-day series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    /// Weekday label
    pub name: &'static str,
    /// Application count
    pub apps: u32,
}

/// A field row inside an ER-diagram box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SchemaField {
    /// Column name
    pub name: &'static str,
    /// Display type, e.g. "PK INT"
    pub ty: &'static str,
}

/// An entity box in the ER-diagram illustration.
///
/// Used only to draw the diagram; the fields are display text, not a schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SchemaEntity {
    /// Box title
    pub title: &'static str,
    /// Box icon
    pub icon: Icon,
    /// Ordered field rows
    pub fields: &'static [SchemaField],
    /// Visual emphasis (bright border + glow)
    pub emphasized: bool,
}

/// A headline statistic row in the analytics panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatHighlight {
    /// Stat label
    pub label: &'static str,
    /// Pre-formatted stat value
    pub value: &'static str,
}

/// A planned-work row in the roadmap section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RoadmapItem {
    /// Row icon
    pub icon: Icon,
    /// Row title
    pub title: &'static str,
    /// Row copy
    pub desc: &'static str,
}

/// A bullet in the limitations panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Limitation {
    /// Bullet title
    pub title: &'static str,
    /// Bullet copy
    pub desc: &'static str,
}
