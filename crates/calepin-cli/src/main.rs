//! calepin - tile layout computation for orthogonal floor plans
//!
//! Usage:
//!   calepin layout <plan.json> [-f svg|json|text] [-o file]   Compute tile layout
//!   calepin area <plan.json>                                  Outline area in m2
//!   calepin stats <plan.json>                                 Tile counts as JSON

use std::env;

mod cli;

use cli::{cmd_area, cmd_layout, cmd_stats};

fn print_usage() {
    println!("calepin - tile layout computation for orthogonal floor plans");
    println!();
    println!("Usage:");
    println!("  calepin layout <plan.json> [options]   Compute the tile layout");
    println!("  calepin area <plan.json>               Print outline area in m2");
    println!("  calepin stats <plan.json>              Print tile counts as JSON");
    println!();
    println!("Layout options:");
    println!("  -f, --format <svg|json|text>   Output format (default: text)");
    println!("  -o, --output <file>            Write output to a file instead of stdout");
    println!("  --no-offcuts                   Disable offcut reuse");
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("layout") => cmd_layout(&args[1..]),
        Some("area") => cmd_area(&args[1..]),
        Some("stats") => cmd_stats(&args[1..]),
        Some("-h") | Some("--help") | None => print_usage(),
        Some(other) => {
            eprintln!("error: unknown command '{}'", other);
            print_usage();
            std::process::exit(1);
        }
    }
}
