//! Headless worth generation: loads a data directory, propagates worth to
//! the fixed point, prints the convergence report, writes the worth file.
//!
//! Run with: `cargo run --package worthgen-data --example generate -- <data_dir> [out_file]`

use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use worthgen_core::propagate::{GeneratorConfig, WorthGenerator};
use worthgen_data::{load_inputs, write_worth_file, DEFAULT_HEADER};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let data_dir = PathBuf::from(args.next().unwrap_or_else(|| "data".to_string()));
    let out_path = PathBuf::from(args.next().unwrap_or_else(|| "worth.toml".to_string()));

    let mut inputs = match load_inputs(&data_dir) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("failed to load {}: {e}", data_dir.display());
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Loaded {} items, {} base prices from {}",
        inputs.items.len(),
        inputs.base_prices.len(),
        data_dir.display()
    );

    let generator = WorthGenerator::new(GeneratorConfig {
        inflation: inputs.config.inflation,
    });
    let (worth, report) = match generator.generate(&mut inputs.items, &inputs.base_prices) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("generation failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Priced {} of {} items in {} passes",
        worth.len(),
        inputs.items.len(),
        report.passes
    );

    for unresolved in &report.unresolved {
        match &unresolved.recipe {
            Some(recipe) => println!("  unresolved: {} (recipe: {recipe:?})", unresolved.item),
            None => println!("  unresolved: {} (no recipe)", unresolved.item),
        }
    }
    for item in &report.zero_valued {
        println!("  zero value: {item}");
    }

    let header = inputs.config.header.as_deref().unwrap_or(DEFAULT_HEADER);
    if let Err(e) = write_worth_file(&out_path, &worth, inputs.config.flat_names, header) {
        eprintln!("failed to write {}: {e}", out_path.display());
        return ExitCode::FAILURE;
    }

    println!("Wrote {}", out_path.display());
    ExitCode::SUCCESS
}
