//! Common utilities shared across CLI commands.

use std::fs;
use std::process;

use calepin::{bounding_box, LayoutResult, Plan, Point, TileKind};

/// Output format for the layout command.
#[derive(Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Svg,
    Json,
    Text,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<OutputFormat> {
        match name.to_lowercase().as_str() {
            "svg" => Some(OutputFormat::Svg),
            "json" => Some(OutputFormat::Json),
            "text" => Some(OutputFormat::Text),
            _ => None,
        }
    }
}

/// Read and parse a plan file, exiting with a message on failure.
pub fn load_plan(path: &str) -> Plan {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: cannot read {}: {}", path, e);
            process::exit(1);
        }
    };
    match Plan::from_json(&content) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

/// Fill style for a tile category.
///
/// Full tiles are solid; cut tiles get a stripe texture and reused
/// offcuts a crosshatch, so a printout shows at a glance which tiles
/// need cutting and which come from the scrap pile.
fn tile_fill(kind: TileKind) -> &'static str {
    match kind {
        TileKind::Full => "#e5e7eb",
        TileKind::Partial => "url(#cut-stripes)",
        TileKind::OffcutReused => "url(#offcut-cross)",
    }
}

/// Render the outline and its tiles as a standalone SVG document.
pub fn layout_to_svg(outline: &[Point], result: &LayoutResult) -> String {
    let (min_x, min_y, max_x, max_y) =
        bounding_box(outline).unwrap_or((0.0, 0.0, 1000.0, 1000.0));
    let margin = 20.0;

    let mut svg = String::new();
    svg.push_str(&format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="{:.2} {:.2} {:.2} {:.2}">
<defs>
  <pattern id="cut-stripes" width="12" height="12" patternUnits="userSpaceOnUse">
    <rect width="12" height="12" fill="#e5e7eb"/>
    <path d="M0,12 L12,0" stroke="#888" stroke-width="2"/>
  </pattern>
  <pattern id="offcut-cross" width="12" height="12" patternUnits="userSpaceOnUse">
    <rect width="12" height="12" fill="#bae6fd"/>
    <path d="M0,12 L12,0 M0,0 L12,12" stroke="#444" stroke-width="2"/>
  </pattern>
</defs>
"##,
        min_x - margin,
        min_y - margin,
        max_x - min_x + margin * 2.0,
        max_y - min_y + margin * 2.0,
    ));

    // Tiles first, outline stroke on top
    svg.push_str("<g stroke=\"#999\" stroke-width=\"0.5\">\n");
    for tile in &result.tiles {
        if tile.rotation != 0.0 {
            svg.push_str(&format!(
                "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\" transform=\"rotate({:.1} {:.2} {:.2})\"/>\n",
                tile.x, tile.y, tile.w, tile.h, tile_fill(tile.kind), tile.rotation, tile.x, tile.y
            ));
        } else {
            svg.push_str(&format!(
                "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>\n",
                tile.x, tile.y, tile.w, tile.h, tile_fill(tile.kind)
            ));
        }
    }
    svg.push_str("</g>\n");

    if outline.len() >= 2 {
        svg.push_str("<path d=\"M");
        for (i, pt) in outline.iter().enumerate() {
            if i == 0 {
                svg.push_str(&format!("{:.2},{:.2}", pt.x, pt.y));
            } else {
                svg.push_str(&format!(" L{:.2},{:.2}", pt.x, pt.y));
            }
        }
        svg.push_str(" Z\" stroke=\"#2563eb\" stroke-width=\"2\" fill=\"none\"/>\n");
    }

    svg.push_str("</svg>\n");
    svg
}
