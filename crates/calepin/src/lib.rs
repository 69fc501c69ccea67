//! # calepin
//!
//! Core library for tracing orthogonal floor outlines and computing
//! tile layouts ("calepinage") over them.
//!
//! Three layers, leaves first:
//! - geometry kernel: shoelace area, ray-cast point-in-polygon,
//!   distance and bounding-box primitives
//! - outline editor: click-driven state machine with 90° snapping,
//!   closure detection and start-corner placement
//! - layout engine: row-by-row tile generation with pattern offset,
//!   greedy offcut reuse and aggregate counts
//!
//! Rendering, settings UI and storage live outside this crate; they
//! consume the point lists, tile rectangles and counts produced here.

pub mod clip;
pub mod geometry;
pub mod layout;
pub mod outline;
pub mod plan;

// Re-export common types at crate root for convenience.
pub use clip::point_in_polygon;
pub use geometry::{bounding_box, polygon_area, Point};
pub use layout::{compute_layout, LayoutResult, Tile, TileConfig, TileCounts, TileKind, TilePattern};
pub use outline::{CornerType, DrawState, OutlineEditor};
pub use plan::{Plan, PlanError, PlanPoint};
