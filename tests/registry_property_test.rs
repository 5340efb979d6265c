//! Property tests of the registry's prefix matching, independent of any
//! table: generated key sets must obey the ancestor-fallback and subtree
//! containment rules for arbitrary queries.

use std::collections::HashSet;

use proptest::prelude::*;
use rstest::rstest;

use kleio::adna::registry::{normalize_label, CladeRecord, CladeRegistry};

#[derive(Debug, Clone, PartialEq)]
struct Rec {
    id: String,
}

impl CladeRecord for Rec {
    fn record_id(&self) -> &str {
        &self.id
    }
}

fn build(labels: &[String]) -> CladeRegistry<Rec> {
    let mut reg = CladeRegistry::with_min_ancestor_len(1);
    for (i, label) in labels.iter().enumerate() {
        reg.insert(label, Rec { id: format!("r{}", i) });
    }
    reg
}

fn label_strategy() -> impl Strategy<Value = String> {
    // haplogroup-shaped: basal letter, optional digits, optional subclade letters
    proptest::string::string_regex("[A-Z][0-9]{0,2}[a-z]{0,2}[0-9]{0,1}").unwrap()
}

proptest! {
    #[test]
    fn exact_key_queries_return_their_own_bucket(
        labels in proptest::collection::vec(label_strategy(), 1..20)
    ) {
        let reg = build(&labels);
        for label in &labels {
            let hits = reg.exact_or_nearest_ancestor(label);
            prop_assert!(!hits.is_empty(), "own bucket empty for {}", label);
        }
    }

    #[test]
    fn nearest_ancestor_is_the_longest_prefixing_key(
        labels in proptest::collection::vec(label_strategy(), 1..20),
        query in label_strategy(),
    ) {
        let reg = build(&labels);
        let q = normalize_label(&query);
        let keys: HashSet<String> = labels.iter().map(|l| normalize_label(l)).collect();

        if !keys.contains(&q) {
            let expected = keys
                .iter()
                .filter(|k| q.starts_with(k.as_str()))
                .map(|k| k.len())
                .max();
            let hits = reg.exact_or_nearest_ancestor(&query);
            match expected {
                Some(len) => {
                    prop_assert!(!hits.is_empty());
                    // every returned record sits under a key of the maximal length
                    let source = labels
                        .iter()
                        .enumerate()
                        .find(|(i, _)| hits[0].id == format!("r{}", i))
                        .map(|(_, l)| normalize_label(l))
                        .unwrap();
                    prop_assert_eq!(source.len(), len);
                    prop_assert!(q.starts_with(source.as_str()));
                }
                None => prop_assert!(hits.is_empty()),
            }
        }
    }

    #[test]
    fn subtree_contains_the_exact_bucket_and_only_descendants(
        labels in proptest::collection::vec(label_strategy(), 1..20),
    ) {
        let reg = build(&labels);
        for query in &labels {
            let q = normalize_label(query);
            let exact: HashSet<&str> = reg
                .exact_or_nearest_ancestor(query)
                .iter()
                .map(|r| r.id.as_str())
                .collect();
            let subtree: HashSet<&str> = reg
                .subtree(query)
                .iter()
                .map(|r| r.id.as_str())
                .collect();
            // an indexed key's own bucket is part of its subtree
            prop_assert!(exact.is_subset(&subtree));
            // and every subtree member hangs from a key the query prefixes
            for rec in reg.subtree(query) {
                let i: usize = rec.id[1..].parse().unwrap();
                prop_assert!(normalize_label(&labels[i]).starts_with(&q));
            }
        }
    }

    #[test]
    fn no_record_id_repeats_in_any_subtree(
        labels in proptest::collection::vec(label_strategy(), 1..20),
        query in label_strategy(),
    ) {
        let reg = build(&labels);
        let hits = reg.subtree(&query);
        let distinct: HashSet<&str> = hits.iter().map(|r| r.id.as_str()).collect();
        prop_assert_eq!(distinct.len(), hits.len());
    }
}

#[rstest]
#[case::deep_fallback("U5B1C2", &["d"])]
#[case::exact_beats_ancestor("U5B1", &["d"])]
#[case::basal_exact("U5", &["a", "b", "c"])]
#[case::unknown("H1A", &[])]
fn ancestor_scenarios(#[case] query: &str, #[case] expected: &[&str]) {
    let mut reg = CladeRegistry::with_min_ancestor_len(2);
    reg.insert("U5", Rec { id: "a".into() });
    reg.insert("U5", Rec { id: "b".into() });
    reg.insert("U5", Rec { id: "c".into() });
    reg.insert("U5B1", Rec { id: "d".into() });

    let hits: Vec<&str> = reg
        .exact_or_nearest_ancestor(query)
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(hits, expected);
}
