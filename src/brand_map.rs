//! Brand table loader: CSV rows → normalized brand name → Wikidata QID.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::normalize::normalize_name;

/// Column aliases for the brand name field, tried in priority order.
const NAME_COLUMNS: &[&str] = &["brand_name", "brand", "name"];

/// Column aliases for the Wikidata identifier field, tried in priority order.
const QID_COLUMNS: &[&str] = &["wikidata_link", "wikidata", "qid"];

/// Mapping from normalized brand name to Wikidata QID.
pub type BrandMap = HashMap<String, String>;

/// Load the brand table from a CSV file with a header row.
///
/// Rows where either field is missing or blank after trimming are skipped.
/// Duplicate normalized names keep the first QID seen.
pub fn load_brand_map(path: &Path) -> Result<BrandMap> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let headers = reader.headers()?.clone();
    let mut brand_map = BrandMap::new();

    for (idx, result) in reader.records().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                tracing::debug!(row = idx + 1, error = %e, "Skipping unreadable CSV row");
                continue;
            }
        };

        // First alias with a non-empty raw value wins; a whitespace-only
        // value still wins resolution and then fails the trim check below.
        let resolve = |candidates: &[&str]| -> Option<String> {
            candidates
                .iter()
                .find_map(|col| {
                    headers
                        .iter()
                        .position(|h| h == *col)
                        .and_then(|i| row.get(i))
                        .filter(|v| !v.is_empty())
                })
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let (Some(name), Some(qid)) = (resolve(NAME_COLUMNS), resolve(QID_COLUMNS)) else {
            continue;
        };

        let key = normalize_name(&name);
        if brand_map.contains_key(&key) {
            tracing::debug!(brand = %name, "Duplicate brand name, keeping first QID");
            continue;
        }
        brand_map.insert(key, qid);
    }

    Ok(brand_map)
}
