//! Streaming subject/name extraction from the restaurant dataset.
//!
//! The dataset is line-oriented: a block-start line names a restaurant
//! subject, and the lines that follow (until the next block-start) may
//! declare its name. The scan is a single pass holding only the current
//! subject and the accumulated results.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

/// Subject/name pairs in first-seen subject order.
///
/// A later name declaration for an already-seen subject overwrites the
/// stored name without moving the subject's position.
#[derive(Debug, Default)]
pub struct SubjectNames {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl SubjectNames {
    pub(crate) fn record(&mut self, subject: &str, name: &str) {
        match self.positions.get(subject) {
            Some(&i) => self.entries[i].1 = name.to_string(),
            None => {
                self.positions
                    .insert(subject.to_string(), self.entries.len());
                self.entries.push((subject.to_string(), name.to_string()));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate pairs in first-seen subject order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(s, n)| (s.as_str(), n.as_str()))
    }
}

/// Line matchers for restaurant blocks.
pub struct SubjectExtractor {
    subject_re: Regex,
    name_re: Regex,
}

impl SubjectExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            // Block start: a `:restaurant_*` token at the beginning of the
            // line, terminated by whitespace or `;`.
            subject_re: Regex::new(r"^\s*:(restaurant_[^\s;]+)\b")
                .context("Invalid subject pattern")?,
            // Name declaration: the predicate followed by a quoted literal.
            // The capture is the raw quoted content, no unescaping.
            name_re: Regex::new(r#":restaurantName\s+"([^"]+)""#)
                .context("Invalid name pattern")?,
        })
    }

    /// Stream the file once, pairing each block's subject with its last
    /// declared name. Lines matching neither pattern are skipped.
    pub fn extract(&self, path: &Path) -> Result<SubjectNames> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open dataset file: {}", path.display()))?;
        let mut reader = BufReader::new(file);

        let mut names = SubjectNames::default();
        let mut current_subject: Option<String> = None;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            if read == 0 {
                break;
            }
            // The dataset can carry stray non-UTF-8 bytes; the patterns only
            // need the ASCII structure of each line, so decode lossily.
            let line = String::from_utf8_lossy(&buf);

            if let Some(caps) = self.subject_re.captures(&line) {
                current_subject = Some(caps[1].to_string());
                continue;
            }

            if let Some(subject) = current_subject.as_deref() {
                if let Some(caps) = self.name_re.captures(&line) {
                    names.record(subject, &caps[1]);
                }
            }
        }

        Ok(names)
    }
}
