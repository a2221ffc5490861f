//! Catalog integrity harness.
//!
//! Loads a unit catalog JSON file, runs the startup integrity checks,
//! and prints the report plus the canonical fingerprint. Exits 1 when
//! findings exist so CI can gate on catalog data.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use unit_directory::catalog::UnitCatalog;
use unit_directory::domain::Unit;
use unit_directory::fingerprint::catalog_fingerprint;
use unit_directory::integrity::validate_units;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Explicit argument first, then the conventional locations.
    let candidates: Vec<String> = match std::env::args().nth(1) {
        Some(path) => vec![path],
        None => vec![
            "units.json".to_string(),
            "tests/fixtures/catalog.json".to_string(),
            "unit_directory/tests/fixtures/catalog.json".to_string(),
        ],
    };

    let mut data = None;
    for path in &candidates {
        if Path::new(path).exists() {
            match fs::read_to_string(path) {
                Ok(contents) => {
                    println!("Loaded catalog from: {}", path);
                    data = Some(contents);
                    break;
                }
                Err(err) => {
                    eprintln!("Failed to read {}: {}", path, err);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    let Some(data) = data else {
        eprintln!(
            "No catalog file found. Pass a path or provide one of: {}",
            candidates.join(", ")
        );
        return ExitCode::FAILURE;
    };

    let units: Vec<Unit> = match serde_json::from_str(&data) {
        Ok(units) => units,
        Err(err) => {
            eprintln!("Failed to parse catalog JSON: {}", err);
            return ExitCode::FAILURE;
        }
    };

    // Validate the raw list so duplicate ids are still visible.
    let report = validate_units(&units);
    report.log();

    let catalog = UnitCatalog::from_units(units);

    println!("Units:       {}", catalog.len());
    println!("Roots:       {}", catalog.roots().len());
    println!("Fingerprint: {}", catalog_fingerprint(&catalog));
    println!("{}", report);

    if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
