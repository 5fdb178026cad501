//! # Sailmaker CLI
//!
//! Terminal front-end for the shade sail engine.
//!
//! ```text
//! sail_cli [--verbose] [--quote] [config.json]
//! ```
//!
//! With a configuration file, the `ShadeConfig` is read from JSON. Without
//! one, the corner count and edge lengths (mm) are prompted for and default
//! options are used. A summary is printed, followed by the result JSON (or
//! the full quote JSON with `--quote`).

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use sail_core::measurements::{review_measurements, FieldAssessment, TypoThresholds};
use sail_core::{
    compute_shade_calculation, format_area, format_length, CalculationResult, CornerCount, Quote, SailError,
    SailResult, ShadeConfig,
};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

struct Args {
    verbose: bool,
    quote: bool,
    config_path: Option<String>,
}

fn parse_args() -> Args {
    let mut args = Args {
        verbose: false,
        quote: false,
        config_path: None,
    };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => args.verbose = true,
            "-q" | "--quote" => args.quote = true,
            _ => args.config_path = Some(arg),
        }
    }
    args
}

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }
    input
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt).trim().parse().unwrap_or(default)
}

/// Corner count as typed; blank means the default, anything else must be 3 to 6.
fn parse_corners(input: &str, default: CornerCount) -> SailResult<CornerCount> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }
    let corners: u8 = input
        .parse()
        .map_err(|_| SailError::invalid_input("corners", input, "Enter a whole number from 3 to 6"))?;
    CornerCount::try_from(corners)
}

fn load_config(path: &str) -> SailResult<ShadeConfig> {
    let contents = fs::read_to_string(Path::new(path))
        .map_err(|e| SailError::file_error("read", path, e.to_string()))?;
    let config: ShadeConfig = serde_json::from_str(&contents).map_err(|e| SailError::SerializationError {
        reason: format!("Invalid configuration in {}: {}", path, e),
    })?;
    Ok(config)
}

fn prompt_config() -> SailResult<ShadeConfig> {
    let corners = parse_corners(&prompt_line("Number of corners (3-6) [4]: "), CornerCount::Four)?;
    let mut config = ShadeConfig::new(corners);

    for key in corners.edge_keys() {
        let mm = prompt_f64(&format!("Edge {} (mm) [4000]: ", key), 4000.0);
        config.measurements.set_length(key, mm)?;
    }
    for key in corners.diagonal_keys() {
        let mm = prompt_f64(&format!("Diagonal {} (mm, 0 to skip) [0]: ", key), 0.0);
        config.measurements.set_length(key, mm)?;
    }
    Ok(config)
}

fn print_summary(config: &ShadeConfig, result: &CalculationResult) {
    let unit = config.unit_system;

    println!("═══════════════════════════════════════");
    println!("  SHADE SAIL QUOTE");
    println!("═══════════════════════════════════════");
    println!();
    println!("Configuration:");
    println!("  Shape:         {}", config.corners().display_name());
    println!("  Fabric:        {}", config.fabric.display_name());
    println!("  Edge:          {}", config.edge_type.display_name());
    println!("  Manufacturing: {}", config.manufacturing.display_name());
    println!();
    println!("Measurements:");
    for (key, mm) in config.measurements.entered_lengths() {
        println!("  {:<3} {}", key, format_length(mm, unit, false));
    }

    let reviews = review_measurements(&config.measurements, unit, &TypoThresholds::default(), &BTreeMap::new());
    for review in reviews {
        match review.assessment {
            FieldAssessment::Suggestion { message, .. } => println!("  [CHECK] {}: {}", review.key, message),
            FieldAssessment::Invalid { error } => println!("  [ERROR] {}", error),
            FieldAssessment::Empty | FieldAssessment::Valid => {}
        }
    }
    println!();

    if !result.is_priced() {
        println!("Enter all edge measurements to see a price.");
        return;
    }

    println!("Result:");
    println!("  Perimeter: {}", format_length(result.perimeter_m * 1000.0, unit, false));
    println!("  Area:      {}", format_area(result.area_m2 * 1_000_000.0, unit));
    if let Some(width) = result.webbing_width_mm {
        println!("  Webbing:   {:.0} mm", width);
    }
    if let Some(wire) = result.wire_thickness_mm {
        println!("  Wire:      {:.0} mm", wire);
    }
    println!("  Weight:    {:.2} kg", result.total_weight_grams / 1000.0);
    println!();
    println!("═══════════════════════════════════════");
    println!("  PRICE: {}", result.currency.format_amount(result.total_price));
    println!("═══════════════════════════════════════");

    match config.ready_for_order(&TypoThresholds::default(), &BTreeMap::new()) {
        Ok(()) => println!("Ready to order."),
        Err(problems) => {
            println!("Not ready to order:");
            for problem in problems {
                println!("  - {}", problem);
            }
        }
    }
}

fn run(args: &Args) -> SailResult<()> {
    let config = match &args.config_path {
        Some(path) => {
            info!(path = %path, "loading configuration");
            load_config(path)?
        }
        None => prompt_config()?,
    };
    debug!(corners = config.corners().count(), "configuration ready");

    let result = compute_shade_calculation(&config);
    println!();
    print_summary(&config, &result);

    println!();
    println!("JSON Output:");
    let json = if args.quote {
        Quote::new(args.config_path.as_deref().unwrap_or("cli"), config).to_json()?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{}", json);
    Ok(())
}

fn main() {
    let args = parse_args();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: could not install log subscriber");
    }

    println!("Sailmaker CLI - Shade Sail Quote Calculator");
    println!("===========================================");

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}
