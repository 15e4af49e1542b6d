//! CLI tool for tileboard - renders a JSON record batch to static HTML
//!
//! Usage:
//!   tileboard_cli <records.json>                    # HTML to stdout
//!   tileboard_cli <records.json> --absolute         # pixel layout instead of grid
//!   tileboard_cli <records.json> --no-menu          # ignore Type/Pages columns
//!   tileboard_cli <records.json> --config cfg.json  # full widget config
//!   tileboard_cli <records.json> -o board.html      # write to file

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};
use tileboard::{render_html, LayoutStrategy, SourceRecord, WidgetConfig};

const USAGE: &str = "Usage: tileboard_cli <records.json> [--grid|--absolute] [--no-menu] [--config cfg.json] [-o output.html]";

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        fail(USAGE);
    }

    let input_path = &args[1];
    let mut config = WidgetConfig::default();
    let mut output_path: Option<&String> = None;

    let mut rest = args[2..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--grid" => config.layout = LayoutStrategy::default(),
            "--absolute" => config.layout = LayoutStrategy::absolute(),
            "--no-menu" => config.menu_support = false,
            "--config" => {
                let path = rest.next().unwrap_or_else(|| fail(USAGE));
                let text = fs::read_to_string(path)
                    .unwrap_or_else(|e| fail(&format!("Error reading {path}: {e}")));
                config = WidgetConfig::from_json(&text)
                    .unwrap_or_else(|e| fail(&format!("Error in {path}: {e}")));
            }
            "-o" => output_path = Some(rest.next().unwrap_or_else(|| fail(USAGE))),
            other => fail(&format!("Unknown argument {other}\n{USAGE}")),
        }
    }

    // Read records
    let text = match fs::read_to_string(input_path) {
        Ok(t) => t,
        Err(e) => fail(&format!("Error reading {input_path}: {e}")),
    };
    let records: Vec<SourceRecord> = match serde_json::from_str(&text) {
        Ok(r) => r,
        Err(e) => fail(&format!("Error parsing records: {e}")),
    };

    tileboard::logging::init(config.level().unwrap_or(tracing::Level::INFO));
    let html = render_html(&records, &config);

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &html) {
                fail(&format!("Error writing {path}: {e}"));
            }
            eprintln!("Written: {path}");
        }
        None => {
            io::stdout().write_all(html.as_bytes()).unwrap();
            println!();
        }
    }
}
