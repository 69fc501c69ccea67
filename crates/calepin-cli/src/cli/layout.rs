//! Layout command implementation.

use std::fs;
use std::process;

use serde::Serialize;

use calepin::{compute_layout, polygon_area, Tile, TileCounts};

use super::common::{layout_to_svg, load_plan, OutputFormat};

/// Full layout report in JSON output format.
#[derive(Serialize)]
struct JsonOutput<'a> {
    area_m2: f64,
    start_corner: &'a str,
    start_corner_fallback: bool,
    counts: TileCounts,
    tiles: &'a [Tile],
}

/// Execute the layout command.
pub fn cmd_layout(args: &[String]) {
    let mut plan_path: Option<&str> = None;
    let mut output_path: Option<&str> = None;
    let mut format = OutputFormat::Text;
    let mut use_offcuts = true;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-f" | "--format" => {
                i += 1;
                if i < args.len() {
                    match OutputFormat::from_name(&args[i]) {
                        Some(f) => format = f,
                        None => {
                            eprintln!("error: unknown format '{}'", args[i]);
                            process::exit(1);
                        }
                    }
                }
            }
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(&args[i]);
                }
            }
            "--no-offcuts" => {
                use_offcuts = false;
            }
            other => {
                plan_path = Some(other);
            }
        }
        i += 1;
    }

    let Some(path) = plan_path else {
        eprintln!("error: no plan file given");
        process::exit(1);
    };

    let plan = load_plan(path);
    let outline = plan.outline_points();
    let config = plan.tile_config(use_offcuts);
    let result = compute_layout(&outline, plan.start_point(), &config, plan.scale);

    if result.start_corner_fallback {
        eprintln!("warning: start point matches no outline corner, laying out from the top-left");
    }

    let area = polygon_area(&outline, plan.scale);

    let output = match format {
        OutputFormat::Svg => layout_to_svg(&outline, &result),
        OutputFormat::Json => {
            let json = JsonOutput {
                area_m2: area,
                start_corner: result.start_corner,
                start_corner_fallback: result.start_corner_fallback,
                counts: result.counts,
                tiles: &result.tiles,
            };
            match serde_json::to_string_pretty(&json) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("error: {}", e);
                    process::exit(1);
                }
            }
        }
        OutputFormat::Text => {
            let c = &result.counts;
            let mut text = String::new();
            text.push_str(&format!("Area: {:.2} m2\n", area));
            text.push_str(&format!("Start corner: {}\n", result.start_corner));
            text.push_str(&format!("Full tiles: {}\n", c.full));
            text.push_str(&format!(
                "Cut tiles: {} ({} from offcuts)\n",
                c.partial, c.offcut_used
            ));
            text.push_str(&format!(
                "Total to buy: {} (without reuse: {})\n",
                c.total, c.total_no_offcut
            ));
            text.push_str(&format!("Offcut gain: {:.1}%\n", c.gain_percent));
            text
        }
    };

    match output_path {
        Some(out) => {
            if let Err(e) = fs::write(out, &output) {
                eprintln!("error: cannot write {}: {}", out, e);
                process::exit(1);
            }
        }
        None => print!("{}", output),
    }
}
