//! Orthogonal outline editing.
//!
//! State machine for tracing a right-angle-only floor outline on the
//! canvas. Clicks append axis-snapped corners, a click near the first
//! point closes the shape, and a separate placement mode picks the
//! corner that anchors tile layout.
//!
//! Every committed edge is axis-aligned: each click is projected onto
//! the dominant axis relative to the previous corner, and its length is
//! rounded to the nearest decimetre so plans stay on a 10 cm grid.

use crate::geometry::{bounding_box, polygon_area, Point};

/// Click this close to the first corner and the outline closes.
pub const CLOSE_DISTANCE: f64 = 20.0;

/// Click this close (per axis) to an existing corner to pick it.
pub const CORNER_PICK_DISTANCE: f64 = 5.0;

/// Tolerance when matching the start point to a bounding-box corner.
const CORNER_CLASSIFY_TOLERANCE: f64 = 2.0;

/// Drawing lifecycle of the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawState {
    Idle,
    Drawing,
    Closed,
}

/// Which bounding-box corner the start point sits on.
///
/// Determines the direction tile rows travel: layout always expands
/// away from the start corner toward the far side of the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerType {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl CornerType {
    /// Classify a start point against a bounding box.
    ///
    /// Returns `None` when the point matches no corner within tolerance,
    /// e.g. a start point from a corrupted plan file. Callers that need
    /// totality fall back to `TopLeft` (the historical behavior) and can
    /// surface the mismatch as a diagnostic.
    pub fn classify(start: Point, bbox: (f64, f64, f64, f64)) -> Option<CornerType> {
        let (min_x, min_y, max_x, max_y) = bbox;
        let near = |a: f64, b: f64| (a - b).abs() < CORNER_CLASSIFY_TOLERANCE;

        if near(start.x, min_x) && near(start.y, min_y) {
            Some(CornerType::TopLeft)
        } else if near(start.x, max_x) && near(start.y, min_y) {
            Some(CornerType::TopRight)
        } else if near(start.x, min_x) && near(start.y, max_y) {
            Some(CornerType::BottomLeft)
        } else if near(start.x, max_x) && near(start.y, max_y) {
            Some(CornerType::BottomRight)
        } else {
            None
        }
    }

    /// Corner name as used in plan files and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            CornerType::TopLeft => "top-left",
            CornerType::TopRight => "top-right",
            CornerType::BottomLeft => "bottom-left",
            CornerType::BottomRight => "bottom-right",
        }
    }
}

/// Editor for one orthogonal outline plus its layout start corner.
///
/// All mutation goes through discrete pointer events (`handle_click`,
/// `drag_corner`); each runs to completion, there is no partial state.
#[derive(Debug, Clone)]
pub struct OutlineEditor {
    points: Vec<Point>,
    state: DrawState,
    placing_start: bool,
    start_point: Option<Point>,
    scale: f64,
}

impl OutlineEditor {
    /// Empty editor at the given scale (pixels per metre).
    pub fn new(scale: f64) -> Self {
        Self {
            points: Vec::new(),
            state: DrawState::Idle,
            placing_start: false,
            start_point: None,
            scale,
        }
    }

    /// Rebuild an editor from a loaded plan.
    ///
    /// Loaded outlines are trusted as already closed; an empty point
    /// list starts over at `Idle`.
    pub fn from_parts(points: Vec<Point>, start_point: Option<Point>, scale: f64) -> Self {
        let state = if points.is_empty() {
            DrawState::Idle
        } else {
            DrawState::Closed
        };
        Self {
            points,
            state,
            placing_start: false,
            start_point,
            scale,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn start_point(&self) -> Option<Point> {
        self.start_point
    }

    pub fn state(&self) -> DrawState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == DrawState::Closed
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Enter or leave start-corner placement mode.
    pub fn set_placing_start(&mut self, active: bool) {
        self.placing_start = active;
    }

    pub fn placing_start(&self) -> bool {
        self.placing_start
    }

    /// Outline area in square metres, 0 while still drawing.
    pub fn area(&self) -> f64 {
        if self.state != DrawState::Closed {
            return 0.0;
        }
        polygon_area(&self.points, self.scale)
    }

    /// Handle a pointer click at canvas position `pos`.
    pub fn handle_click(&mut self, pos: Point) {
        if self.placing_start {
            self.place_start_point(pos);
            return;
        }

        match self.state {
            DrawState::Idle => {
                if self.points.is_empty() {
                    self.points.push(pos);
                    self.state = DrawState::Drawing;
                }
            }
            DrawState::Drawing => self.add_drawing_point(pos),
            DrawState::Closed => {}
        }
    }

    /// Live preview of where the next corner would land.
    ///
    /// Same dominant-axis projection as a committed click, but without
    /// the decimetre rounding; purely visual, never appended.
    pub fn hover_preview(&self, pos: Point) -> Point {
        let Some(&last) = self.points.last() else {
            return pos;
        };
        let dx = pos.x - last.x;
        let dy = pos.y - last.y;
        if dx.abs() > dy.abs() {
            Point::new(pos.x, last.y)
        } else {
            Point::new(last.x, pos.y)
        }
    }

    /// True if `pos` lies within the pick box of any outline corner.
    pub fn is_corner(&self, pos: Point) -> bool {
        self.points.iter().any(|p| {
            (p.x - pos.x).abs() < CORNER_PICK_DISTANCE && (p.y - pos.y).abs() < CORNER_PICK_DISTANCE
        })
    }

    /// Classify the start corner against the outline bounding box.
    pub fn start_corner_classified(&self) -> Option<CornerType> {
        if self.points.len() < 3 {
            return None;
        }
        let start = self.start_point?;
        let bbox = bounding_box(&self.points)?;
        CornerType::classify(start, bbox)
    }

    /// Start corner with the historical `TopLeft` fallback.
    pub fn start_corner_type(&self) -> CornerType {
        self.start_corner_classified().unwrap_or(CornerType::TopLeft)
    }

    /// Drag an existing corner to a new position (post-closure edit).
    ///
    /// The new position is snapped so the corner stays axis-aligned
    /// with its previous neighbor in the sequence, which preserves the
    /// orthogonality invariant incrementally. Dragging an endpoint of
    /// a closed outline moves the closing duplicate with it.
    pub fn drag_corner(&mut self, index: usize, pos: Point) {
        if self.state != DrawState::Closed || index >= self.points.len() {
            return;
        }
        let n = self.points.len();
        if n < 3 {
            return;
        }

        // Previous distinct neighbor; for the first corner that is the
        // one before the closing duplicate.
        let prev = if index == 0 { self.points[n - 2] } else { self.points[index - 1] };

        let dx = pos.x - prev.x;
        let dy = pos.y - prev.y;
        let snapped = if dx.abs() > dy.abs() {
            Point::new(pos.x, prev.y)
        } else {
            Point::new(prev.x, pos.y)
        };

        self.points[index] = snapped;
        if index == 0 {
            self.points[n - 1] = snapped;
        } else if index == n - 1 {
            self.points[0] = snapped;
        }
    }

    /// Clear everything and return to `Idle`.
    pub fn reset(&mut self) {
        self.points.clear();
        self.state = DrawState::Idle;
        self.placing_start = false;
        self.start_point = None;
    }

    fn place_start_point(&mut self, pos: Point) {
        if !self.is_corner(pos) {
            return;
        }
        // Snap to the closest corner by euclidean distance.
        let closest = self
            .points
            .iter()
            .min_by(|a, b| a.distance(pos).total_cmp(&b.distance(pos)));
        if let Some(&corner) = closest {
            self.start_point = Some(corner);
            self.placing_start = false;
        }
    }

    fn add_drawing_point(&mut self, pos: Point) {
        let first = self.points[0];

        // Close when clicking near the first corner of a shape with
        // at least three committed corners.
        if self.points.len() >= 3 && pos.distance(first) < CLOSE_DISTANCE {
            let last = self.points[self.points.len() - 1];
            // Force the final corner onto a right angle with the start.
            let forced = if (last.x - first.x).abs() > (last.y - first.y).abs() {
                Point::new(first.x, last.y)
            } else {
                Point::new(last.x, first.y)
            };
            self.points.push(forced);
            self.points.push(first);
            self.state = DrawState::Closed;
            return;
        }

        let last = self.points[self.points.len() - 1];
        let dx = pos.x - last.x;
        let dy = pos.y - last.y;
        let next = if dx.abs() > dy.abs() {
            let length = dx / self.scale;
            let rounded = (length.abs() * 10.0).round() / 10.0 * length.signum();
            Point::new(last.x + rounded * self.scale, last.y)
        } else {
            let length = dy / self.scale;
            let rounded = (length.abs() * 10.0).round() / 10.0 * length.signum();
            Point::new(last.x, last.y + rounded * self.scale)
        };
        self.points.push(next);
    }
}
