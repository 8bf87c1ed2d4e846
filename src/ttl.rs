//! Turtle serialization of matched brand links.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::linker::BrandLink;

/// Escape a label for a double-quoted Turtle literal.
pub fn escape_label(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Write the namespace header and one label/sameAs block per link.
///
/// The parent directory is created when the path names one.
pub fn write_links(path: &Path, links: &[BrandLink]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(w, "@prefix : <http://ltr.european-restaurants.org/> .")?;
    writeln!(w, "@prefix owl: <http://www.w3.org/2002/07/owl#> .")?;
    writeln!(w, "@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .")?;
    writeln!(w, "@prefix wd: <http://www.wikidata.org/entity/> .")?;
    writeln!(w)?;

    for link in links {
        writeln!(
            w,
            ":{} rdfs:label \"{}\"@en ;",
            link.subject,
            escape_label(&link.label)
        )?;
        writeln!(w, "    owl:sameAs wd:{} .", link.qid)?;
        writeln!(w)?;
    }

    w.flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
