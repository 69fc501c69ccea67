//! Tile layout computation ("calepinage").
//!
//! Pure function of outline + start corner + tile configuration: walks
//! the outline's bounding box row by row from the start corner, emits
//! every tile rectangle whose corner test passes, and runs cut tiles
//! through a first-fit offcut pool so leftover pieces get reused.
//!
//! The engine keeps no state between invocations; the offcut pool is
//! local to a single call. Counts come back synchronously in the result.

use serde::{Deserialize, Serialize};

use crate::clip::any_corner_inside;
use crate::geometry::{bounding_box, Point};
use crate::outline::CornerType;

/// Far-edge tolerance when stepping tiles across the bounding box.
const EDGE_EPSILON: f64 = 0.01;

/// Slack when matching a cut request against a pooled offcut, in pixels.
const OFFCUT_TOLERANCE: f64 = 0.1;

/// Row layout pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TilePattern {
    /// All rows start at the same offset.
    Straight,
    /// Alternating rows shifted by half a tile (running bond).
    Offset,
}

impl TilePattern {
    pub fn name(&self) -> &'static str {
        match self {
            TilePattern::Straight => "straight",
            TilePattern::Offset => "offset",
        }
    }

    pub fn from_name(name: &str) -> Option<TilePattern> {
        match name.to_lowercase().as_str() {
            "straight" => Some(TilePattern::Straight),
            "offset" | "brick" | "running-bond" => Some(TilePattern::Offset),
            _ => None,
        }
    }
}

/// How a placed tile was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TileKind {
    /// Whole tile, no cutting.
    Full,
    /// Cut down from fresh stock.
    Partial,
    /// Cut satisfied from a previously pooled offcut.
    OffcutReused,
}

impl TileKind {
    pub fn name(&self) -> &'static str {
        match self {
            TileKind::Full => "full",
            TileKind::Partial => "partial",
            TileKind::OffcutReused => "offcut-reused",
        }
    }
}

/// One placed tile rectangle in canvas pixels.
///
/// `x`/`y` is the top-left corner regardless of which direction the
/// layout traversal ran; `rotation` is the display orientation in
/// degrees and does not affect layout math.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Tile {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub kind: TileKind,
    pub rotation: f64,
}

/// Tile dimensions and layout options.
///
/// Physical units: tile width/height in centimetres, joint spacing in
/// millimetres. `orientation` only rotates tiles for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileConfig {
    pub tile_w: f64,
    pub tile_h: f64,
    pub spacing: f64,
    pub pattern: TilePattern,
    pub orientation: f64,
    pub use_offcuts: bool,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            tile_w: 120.0,
            tile_h: 30.0,
            spacing: 3.0,
            pattern: TilePattern::Straight,
            orientation: 0.0,
            use_offcuts: true,
        }
    }
}

/// Aggregate tile counts for one layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TileCounts {
    /// Whole tiles.
    pub full: u32,
    /// All cut tiles, whether or not the cut came from the pool.
    pub partial: u32,
    /// Cut tiles satisfied from the offcut pool.
    pub offcut_used: u32,
    /// Tiles to buy with offcut reuse applied.
    pub total: u32,
    /// Tiles to buy if every cut consumed fresh stock.
    pub total_no_offcut: u32,
    /// Percentage saved by reuse, 0 when nothing is laid.
    pub gain_percent: f64,
}

/// Result of one layout computation.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutResult {
    pub tiles: Vec<Tile>,
    pub counts: TileCounts,
    /// Corner the traversal started from.
    pub start_corner: &'static str,
    /// True when the start point matched no bounding-box corner and the
    /// top-left fallback kicked in; worth surfacing, it usually means a
    /// stale or corrupted plan.
    pub start_corner_fallback: bool,
}

impl LayoutResult {
    /// Empty result with zeroed counts, returned for degenerate input.
    pub fn empty() -> Self {
        Self {
            tiles: Vec::new(),
            counts: TileCounts::default(),
            start_corner: CornerType::TopLeft.name(),
            start_corner_fallback: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Pool of leftover piece widths from prior cuts, in pixels.
///
/// First-fit in insertion order: a request takes the first pooled piece
/// wide enough (within a fixed tolerance), not the best-fitting one.
/// This is a greedy 1-D bin packing, not an optimal solver.
#[derive(Debug, Default)]
struct OffcutPool {
    widths: Vec<f64>,
}

impl OffcutPool {
    /// Try to satisfy a cut of `width` from the pool.
    fn take(&mut self, width: f64) -> bool {
        let found = self
            .widths
            .iter()
            .position(|&w| w >= width - OFFCUT_TOLERANCE);
        match found {
            Some(i) => {
                self.widths.remove(i);
                true
            }
            None => false,
        }
    }

    /// Pool the remainder left after cutting fresh stock.
    fn record(&mut self, remainder: f64) {
        self.widths.push(remainder);
    }
}

/// Mutable cursor state for one layout pass.
struct LayoutPass<'a> {
    polygon: &'a [Point],
    tiles: Vec<Tile>,
    pool: OffcutPool,
    full: u32,
    partial: u32,
    offcut_used: u32,
    use_offcuts: bool,
    tw: f64,
    th: f64,
    rotation: f64,
    y_sign: f64,
}

impl LayoutPass<'_> {
    /// Corner test + emit for one full tile with left edge at `x`.
    fn try_full(&mut self, x: f64, tile_y: f64) {
        if self.emit(x, tile_y, self.tw, TileKind::Full) {
            self.full += 1;
        }
    }

    /// Corner test + emit for a cut tile, routing it through the pool.
    fn try_cut(&mut self, x: f64, tile_y: f64, width: f64) {
        let corners = self.corners(x, tile_y, width);
        if !any_corner_inside(&corners, self.polygon) {
            return;
        }
        let kind = if self.use_offcuts && self.pool.take(width) {
            self.offcut_used += 1;
            TileKind::OffcutReused
        } else {
            if self.use_offcuts {
                self.pool.record(self.tw - width);
            }
            TileKind::Partial
        };
        self.partial += 1;
        self.push_tile(x, tile_y, width, kind);
    }

    fn emit(&mut self, x: f64, tile_y: f64, width: f64, kind: TileKind) -> bool {
        let corners = self.corners(x, tile_y, width);
        if !any_corner_inside(&corners, self.polygon) {
            return false;
        }
        self.push_tile(x, tile_y, width, kind);
        true
    }

    fn corners(&self, x: f64, tile_y: f64, width: f64) -> [(f64, f64); 4] {
        [
            (x, tile_y),
            (x + width, tile_y),
            (x + width, tile_y + self.y_sign * self.th),
            (x, tile_y + self.y_sign * self.th),
        ]
    }

    fn push_tile(&mut self, x: f64, tile_y: f64, width: f64, kind: TileKind) {
        // Normalize so y is always the top edge, even when rows travel up.
        let top = if self.y_sign > 0.0 { tile_y } else { tile_y - self.th };
        self.tiles.push(Tile {
            x,
            y: top,
            w: width,
            h: self.th,
            kind,
            rotation: self.rotation,
        });
    }
}

/// Compute a tile layout over a closed outline.
///
/// Returns an empty result for degenerate input: missing start point,
/// fewer than 3 corners, non-positive tile dimensions or scale, or a
/// joint so negative that the stepping would not advance.
pub fn compute_layout(
    points: &[Point],
    start_point: Option<Point>,
    config: &TileConfig,
    scale: f64,
) -> LayoutResult {
    let Some(start) = start_point else {
        return LayoutResult::empty();
    };
    if points.len() < 3 || scale <= 0.0 {
        return LayoutResult::empty();
    }

    // cm / mm to pixels
    let tw = config.tile_w / 100.0 * scale;
    let th = config.tile_h / 100.0 * scale;
    let sp = config.spacing / 1000.0 * scale;

    // Degenerate tile or joint values must not stall the row stepping.
    if tw <= 0.0 || th <= 0.0 || tw + sp <= 0.0 || th + sp <= 0.0 {
        return LayoutResult::empty();
    }

    let Some(bbox) = bounding_box(points) else {
        return LayoutResult::empty();
    };
    let (min_x, min_y, max_x, max_y) = bbox;

    let classified = CornerType::classify(start, bbox);
    let fallback = classified.is_none();
    let corner = classified.unwrap_or(CornerType::TopLeft);

    // Traversal always expands from the start corner toward the far side.
    let going_right = !matches!(corner, CornerType::TopRight | CornerType::BottomRight);
    let going_down = !matches!(corner, CornerType::BottomLeft | CornerType::BottomRight);
    let y_sign = if going_down { 1.0 } else { -1.0 };

    // One extra tile height of overshoot guards against boundary rounding.
    let n_rows = ((max_y - min_y + th * 2.0) / (th + sp)).ceil() as u32;

    let mut pass = LayoutPass {
        polygon: points,
        tiles: Vec::new(),
        pool: OffcutPool::default(),
        full: 0,
        partial: 0,
        offcut_used: 0,
        use_offcuts: config.use_offcuts,
        tw,
        th,
        rotation: config.orientation,
        y_sign,
    };

    for row in 0..n_rows {
        let tile_y = start.y + y_sign * f64::from(row) * (th + sp);

        let start_with_half = config.pattern == TilePattern::Offset && row % 2 == 1;
        let mut x;
        if start_with_half {
            // Leading half tile on the start side realizes the running bond.
            let part_width = tw / 2.0;
            let part_start_x = if going_right { start.x } else { start.x - part_width };
            pass.try_cut(part_start_x, tile_y, part_width);
            x = if going_right {
                part_start_x + part_width + sp
            } else {
                part_start_x - sp
            };
        } else {
            x = start.x;
        }

        // Full tiles until the far edge of the bounding box.
        if going_right {
            while x + tw <= max_x + EDGE_EPSILON {
                pass.try_full(x, tile_y);
                x += tw + sp;
            }
        } else {
            while x - tw >= min_x - EDGE_EPSILON {
                pass.try_full(x - tw, tile_y);
                x -= tw + sp;
            }
        }

        // One cut tile covers whatever is left at the row's far end.
        if going_right {
            if x < max_x - EDGE_EPSILON {
                let part_width = max_x - x;
                if part_width > EDGE_EPSILON && part_width < tw {
                    pass.try_cut(x, tile_y, part_width);
                }
            }
        } else if x > min_x + EDGE_EPSILON {
            let part_width = x - min_x;
            if part_width > EDGE_EPSILON && part_width < tw {
                pass.try_cut(x - part_width, tile_y, part_width);
            }
        }
    }

    let total_no_offcut = pass.full + pass.partial;
    let total = if config.use_offcuts {
        pass.full + pass.partial.saturating_sub(pass.offcut_used)
    } else {
        total_no_offcut
    };
    let gain_percent = if config.use_offcuts && total_no_offcut > 0 {
        100.0 * f64::from(total_no_offcut - total) / f64::from(total_no_offcut)
    } else {
        0.0
    };

    LayoutResult {
        tiles: pass.tiles,
        counts: TileCounts {
            full: pass.full,
            partial: pass.partial,
            offcut_used: pass.offcut_used,
            total,
            total_no_offcut,
            gain_percent,
        },
        start_corner: corner.name(),
        start_corner_fallback: fallback,
    }
}
