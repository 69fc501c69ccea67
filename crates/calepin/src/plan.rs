//! Plan file format.
//!
//! A plan is one JSON object holding the traced outline as a flat
//! coordinate list (closing duplicate included), the tile settings and
//! the layout start point. The field names are a compatibility
//! contract with existing plan files, so they stay camelCase.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::layout::{TileConfig, TilePattern};

/// Error type for plan loading.
#[derive(Debug)]
pub enum PlanError {
    /// The file is not valid JSON or does not match the plan shape.
    Parse(String),
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanError::Parse(msg) => write!(f, "plan parse error: {}", msg),
        }
    }
}

impl std::error::Error for PlanError {}

/// Start point as persisted: a bare `{x, y}` object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanPoint {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for PlanPoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<PlanPoint> for Point {
    fn from(p: PlanPoint) -> Self {
        Point::new(p.x, p.y)
    }
}

/// A persisted tiling plan.
///
/// Missing fields take the same defaults a fresh session starts with,
/// so partial or older plan files stay loadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Plan {
    /// Flat `[x0, y0, x1, y1, ...]` outline, closing duplicate included.
    pub points: Vec<f64>,
    /// Tile width in centimetres.
    pub tile_w: f64,
    /// Tile height in centimetres.
    pub tile_h: f64,
    /// Joint width in millimetres.
    pub spacing: f64,
    pub pattern: TilePattern,
    /// Display rotation in degrees.
    pub orientation: f64,
    pub start_point: Option<PlanPoint>,
    /// Pixels per metre.
    pub scale: f64,
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            tile_w: 120.0,
            tile_h: 30.0,
            spacing: 3.0,
            pattern: TilePattern::Straight,
            orientation: 0.0,
            start_point: None,
            scale: 80.0,
        }
    }
}

impl Plan {
    /// Parse a plan from its JSON representation.
    pub fn from_json(json: &str) -> Result<Plan, PlanError> {
        serde_json::from_str(json).map_err(|e| PlanError::Parse(e.to_string()))
    }

    /// Serialize back to the persisted JSON shape.
    pub fn to_json(&self) -> Result<String, PlanError> {
        serde_json::to_string(self).map_err(|e| PlanError::Parse(e.to_string()))
    }

    /// Capture the current editor/config state as a plan.
    pub fn from_state(
        points: &[Point],
        start_point: Option<Point>,
        config: &TileConfig,
        scale: f64,
    ) -> Plan {
        let mut flat = Vec::with_capacity(points.len() * 2);
        for p in points {
            flat.push(p.x);
            flat.push(p.y);
        }
        Plan {
            points: flat,
            tile_w: config.tile_w,
            tile_h: config.tile_h,
            spacing: config.spacing,
            pattern: config.pattern,
            orientation: config.orientation,
            start_point: start_point.map(PlanPoint::from),
            scale,
        }
    }

    /// Outline as points. A trailing unpaired coordinate is dropped.
    pub fn outline_points(&self) -> Vec<Point> {
        self.points
            .chunks_exact(2)
            .map(|xy| Point::new(xy[0], xy[1]))
            .collect()
    }

    pub fn start_point(&self) -> Option<Point> {
        self.start_point.map(Point::from)
    }

    /// Tile configuration carried by this plan.
    ///
    /// Offcut reuse is a session toggle, not part of the persisted
    /// shape, so the caller supplies it.
    pub fn tile_config(&self, use_offcuts: bool) -> TileConfig {
        TileConfig {
            tile_w: self.tile_w,
            tile_h: self.tile_h,
            spacing: self.spacing,
            pattern: self.pattern,
            orientation: self.orientation,
            use_offcuts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_complete_plan() {
        let json = r#"{
            "points": [0, 0, 320, 0, 320, 240, 0, 240, 0, 0],
            "tileW": 60,
            "tileH": 60,
            "spacing": 2,
            "pattern": "offset",
            "orientation": 90,
            "startPoint": {"x": 0, "y": 0},
            "scale": 80
        }"#;
        let plan = Plan::from_json(json).unwrap();

        assert_eq!(plan.outline_points().len(), 5);
        assert_eq!(plan.tile_w, 60.0);
        assert_eq!(plan.pattern, TilePattern::Offset);
        assert_eq!(plan.start_point(), Some(Point::new(0.0, 0.0)));
        assert_eq!(plan.scale, 80.0);

        let cfg = plan.tile_config(true);
        assert_eq!(cfg.orientation, 90.0);
        assert!(cfg.use_offcuts);
    }

    #[test]
    fn missing_fields_use_session_defaults() {
        let plan = Plan::from_json("{}").unwrap();
        assert_eq!(plan, Plan::default());
        assert_eq!(plan.tile_w, 120.0);
        assert_eq!(plan.tile_h, 30.0);
        assert_eq!(plan.spacing, 3.0);
        assert_eq!(plan.pattern, TilePattern::Straight);
        assert_eq!(plan.scale, 80.0);
        assert!(plan.start_point.is_none());
        assert!(plan.points.is_empty());
    }

    #[test]
    fn null_start_point_is_accepted() {
        let plan = Plan::from_json(r#"{"startPoint": null, "points": []}"#).unwrap();
        assert_eq!(plan.start_point(), None);
    }

    #[test]
    fn round_trip_keeps_camel_case_keys() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(160.0, 0.0),
            Point::new(160.0, 160.0),
            Point::new(0.0, 160.0),
            Point::new(0.0, 0.0),
        ];
        let plan = Plan::from_state(
            &points,
            Some(Point::new(0.0, 0.0)),
            &TileConfig::default(),
            80.0,
        );
        let json = plan.to_json().unwrap();

        assert!(json.contains("\"tileW\""), "got {}", json);
        assert!(json.contains("\"tileH\""));
        assert!(json.contains("\"startPoint\""));
        assert!(json.contains("\"straight\""));

        let reloaded = Plan::from_json(&json).unwrap();
        assert_eq!(reloaded, plan);
        assert_eq!(reloaded.outline_points(), points);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Plan::from_json("not json at all").unwrap_err();
        assert!(format!("{}", err).contains("plan parse error"));
    }

    #[test]
    fn unknown_pattern_is_rejected() {
        assert!(Plan::from_json(r#"{"pattern": "herringbone"}"#).is_err());
    }

    #[test]
    fn odd_coordinate_count_drops_the_tail() {
        let plan = Plan::from_json(r#"{"points": [1, 2, 3]}"#).unwrap();
        assert_eq!(plan.outline_points(), vec![Point::new(1.0, 2.0)]);
    }
}
