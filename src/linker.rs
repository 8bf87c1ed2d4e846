//! Join of extracted subject names against the brand map.

use crate::brand_map::BrandMap;
use crate::extract::SubjectNames;
use crate::normalize::normalize_name;

/// A matched restaurant: subject, declared name, Wikidata QID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandLink {
    pub subject: String,
    pub label: String,
    pub qid: String,
}

/// Result of the join: matches in extraction order plus a miss count.
#[derive(Debug, Default)]
pub struct LinkOutcome {
    pub links: Vec<BrandLink>,
    pub missed: usize,
}

/// Look every declared name up in the brand map by its normalized form.
///
/// Matches keep extraction order; the QID is carried over unmodified.
pub fn link_brands(subjects: &SubjectNames, brand_map: &BrandMap) -> LinkOutcome {
    let mut outcome = LinkOutcome::default();

    for (subject, name) in subjects.iter() {
        match brand_map.get(&normalize_name(name)) {
            Some(qid) => outcome.links.push(BrandLink {
                subject: subject.to_string(),
                label: name.to_string(),
                qid: qid.clone(),
            }),
            None => {
                tracing::debug!(subject, name, "No brand match");
                outcome.missed += 1;
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subjects(pairs: &[(&str, &str)]) -> SubjectNames {
        let mut names = SubjectNames::default();
        for (subject, name) in pairs {
            names.record(subject, name);
        }
        names
    }

    fn brand_map(entries: &[(&str, &str)]) -> BrandMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn hit_carries_qid_unmodified() {
        let outcome = link_brands(
            &subjects(&[("restaurant_1", "Pizza Hut")]),
            &brand_map(&[("pizza hut", "Q191615")]),
        );
        assert_eq!(outcome.missed, 0);
        assert_eq!(
            outcome.links,
            vec![BrandLink {
                subject: "restaurant_1".into(),
                label: "Pizza Hut".into(),
                qid: "Q191615".into(),
            }]
        );
    }

    #[test]
    fn miss_counts_without_output() {
        let outcome = link_brands(
            &subjects(&[("restaurant_2", "Burger King")]),
            &brand_map(&[("pizza hut", "Q191615")]),
        );
        assert!(outcome.links.is_empty());
        assert_eq!(outcome.missed, 1);
    }

    #[test]
    fn whitespace_collapse_still_matches() {
        let outcome = link_brands(
            &subjects(&[("restaurant_1", "Pizza   Hut")]),
            &brand_map(&[("pizza hut", "Q191615")]),
        );
        assert_eq!(outcome.links.len(), 1);
        // The declared name is kept verbatim for the label.
        assert_eq!(outcome.links[0].label, "Pizza   Hut");
    }

    #[test]
    fn links_follow_extraction_order() {
        let outcome = link_brands(
            &subjects(&[
                ("restaurant_3", "Subway"),
                ("restaurant_1", "Pizza Hut"),
                ("restaurant_2", "Nowhere Cafe"),
                ("restaurant_4", "KFC"),
            ]),
            &brand_map(&[
                ("pizza hut", "Q191615"),
                ("subway", "Q244457"),
                ("kfc", "Q524757"),
            ]),
        );
        let order: Vec<_> = outcome.links.iter().map(|l| l.subject.as_str()).collect();
        assert_eq!(order, vec!["restaurant_3", "restaurant_1", "restaurant_4"]);
        assert_eq!(outcome.missed, 1);
    }
}
