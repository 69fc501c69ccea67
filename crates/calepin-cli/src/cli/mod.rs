//! CLI command implementations.
//!
//! - `layout` - compute a tile layout and emit text, JSON or SVG
//! - `area` - measure the outline area
//! - `stats` - tile counts only, as JSON

pub mod common;
pub mod layout;
pub mod stats;

pub use layout::cmd_layout;
pub use stats::{cmd_area, cmd_stats};
