//! Area and stats commands.

use std::process;

use calepin::{compute_layout, polygon_area};

use super::common::load_plan;

fn plan_path<'a>(args: &'a [String], command: &str) -> &'a str {
    match args.iter().find(|a| !a.starts_with('-')) {
        Some(path) => path,
        None => {
            eprintln!("error: no plan file given to '{}'", command);
            process::exit(1);
        }
    }
}

/// Print the outline area in square metres.
pub fn cmd_area(args: &[String]) {
    let plan = load_plan(plan_path(args, "area"));
    let area = polygon_area(&plan.outline_points(), plan.scale);
    println!("{:.2} m2", area);
}

/// Print tile counts as a JSON object.
pub fn cmd_stats(args: &[String]) {
    let use_offcuts = !args.iter().any(|a| a == "--no-offcuts");
    let plan = load_plan(plan_path(args, "stats"));
    let outline = plan.outline_points();
    let config = plan.tile_config(use_offcuts);
    let result = compute_layout(&outline, plan.start_point(), &config, plan.scale);

    match serde_json::to_string(&result.counts) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
