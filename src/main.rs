//! Link restaurants in the European restaurants dataset to Wikidata brands.
//!
//! Reads two fixed-path inputs from the working directory and writes one
//! Turtle file asserting `rdfs:label` and `owl:sameAs` per matched
//! restaurant. No flags; `RUST_LOG` tunes diagnostic verbosity only.
//!
//! Run with:
//!   cargo run --bin wikidata_brand_linker

use std::path::{Path, PathBuf};

use anyhow::Result;

use wikidata_brand_linker::{link_brands, load_brand_map, write_links, SubjectExtractor};

/// Restaurant dataset scanned for subjects and declared names.
const TRIG_PATH: &str = "european_restaurants.trig";

/// Brand table mapping brand names to Wikidata QIDs.
const CSV_PATH: &str = "res_brand.csv";

/// Output Turtle file.
const OUT_PATH: &str = "wikidata_brand_links.ttl";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let trig_path = Path::new(TRIG_PATH);
    let csv_path = Path::new(CSV_PATH);

    // Both inputs must exist before any stage runs; nothing is written on
    // this path.
    for path in [trig_path, csv_path] {
        if !path.exists() {
            anyhow::bail!("Input file not found: {}", resolved(path).display());
        }
    }

    let brand_map = load_brand_map(csv_path)?;
    println!("Loaded {} brand mappings.", brand_map.len());

    let extractor = SubjectExtractor::new()?;
    let subject_names = extractor.extract(trig_path)?;
    println!("Found names for {} restaurants.", subject_names.len());

    let outcome = link_brands(&subject_names, &brand_map);
    let out_path = Path::new(OUT_PATH);
    write_links(out_path, &outcome.links)?;
    println!(
        "Matched {} restaurants, missed {}.",
        outcome.links.len(),
        outcome.missed
    );

    tracing::info!(path = %resolved(out_path).display(), "Wrote brand links");
    Ok(())
}

/// Absolute form of a workspace-relative path, for error messages and logs.
fn resolved(path: &Path) -> PathBuf {
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
