//! The one label→records index behind every clade lookup.
//!
//! Clade labels form an implicit ancestor/descendant tree through string
//! prefixes: "U5b1c2" descends from "U5b1" descends from "U5". The registry
//! exploits that for three query shapes: exact key, nearest indexed ancestor,
//! and whole descendant subtree. Registries are built once by an ingestion
//! pass and never mutated afterward.

use std::collections::HashSet;

use indexmap::IndexMap;

/// Anything the registry can index. The id drives de-duplication when one
/// record lands in several buckets.
pub trait CladeRecord {
    fn record_id(&self) -> &str;
}

/// Canonical key form: trimmed, uppercased, trailing uncertainty marker
/// stripped. All matching happens in this space.
pub fn normalize_label(raw: &str) -> String {
    raw.trim().trim_end_matches('~').to_uppercase()
}

#[derive(Debug, Clone, PartialEq)]
struct Bucket<T> {
    /// First-seen spelling, kept for listings.
    label: String,
    records: Vec<T>,
}

/// Insertion-ordered mapping from normalized clade label to records.
///
/// `min_ancestor_key_len` bounds how short an ancestor key may be for
/// nearest-ancestor fallback: large external tables use 2 so a lone "U"
/// cannot swallow every U-descendant query, while small curated registries
/// use 1 because single-letter basal keys are exactly what they index.
#[derive(Debug, Clone, PartialEq)]
pub struct CladeRegistry<T> {
    buckets: IndexMap<String, Bucket<T>>,
    min_ancestor_key_len: usize,
}

impl<T: CladeRecord> Default for CladeRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CladeRecord> CladeRegistry<T> {
    pub fn new() -> Self {
        Self::with_min_ancestor_len(1)
    }

    pub fn with_min_ancestor_len(min_ancestor_key_len: usize) -> Self {
        Self {
            buckets: IndexMap::new(),
            min_ancestor_key_len,
        }
    }

    /// Insert a record under a label. Labels that normalize to the same key
    /// share one bucket; the first-seen spelling is kept for display.
    pub fn insert(&mut self, label: &str, record: T) {
        let key = normalize_label(label);
        if key.is_empty() {
            return;
        }
        self.buckets
            .entry(key)
            .or_insert_with(|| Bucket {
                label: label.trim().trim_end_matches('~').to_string(),
                records: Vec::new(),
            })
            .records
            .push(record);
    }

    /// Exact match wins outright. Otherwise the longest indexed key that is a
    /// prefix of the query (and at least `min_ancestor_key_len` long) stands
    /// in as the nearest ancestor; among equal-length candidates the
    /// lexicographically smallest key wins. No qualifying key yields an empty
    /// slice, never an error.
    pub fn exact_or_nearest_ancestor(&self, query: &str) -> &[T] {
        let q = normalize_label(query);
        if q.is_empty() {
            return &[];
        }
        if let Some(bucket) = self.buckets.get(&q) {
            return &bucket.records;
        }
        let mut best: Option<&str> = None;
        for key in self.buckets.keys() {
            if key.len() < self.min_ancestor_key_len || !q.starts_with(key.as_str()) {
                continue;
            }
            let better = match best {
                None => true,
                Some(b) => key.len() > b.len() || (key.len() == b.len() && key.as_str() < b),
            };
            if better {
                best = Some(key);
            }
        }
        best.and_then(|k| self.buckets.get(k))
            .map(|b| b.records.as_slice())
            .unwrap_or(&[])
    }

    /// Every record under a key the query is an ancestor of (or equal to),
    /// de-duplicated by record id, in registry insertion order.
    pub fn subtree(&self, query: &str) -> Vec<&T> {
        let q = normalize_label(query);
        if q.is_empty() {
            return Vec::new();
        }
        let mut seen: HashSet<&str> = HashSet::new();
        let mut out = Vec::new();
        for (key, bucket) in &self.buckets {
            if !key.starts_with(&q) {
                continue;
            }
            for record in &bucket.records {
                if seen.insert(record.record_id()) {
                    out.push(record);
                }
            }
        }
        out
    }

    /// Distinct records the query resolves to via `exact_or_nearest_ancestor`.
    pub fn count_matching(&self, query: &str) -> usize {
        let records = self.exact_or_nearest_ancestor(query);
        let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
        records
            .iter()
            .filter(|r| seen.insert(r.record_id()))
            .count()
    }

    /// Every display label with at least `min_count` records, sorted by count
    /// descending; ties keep insertion order.
    pub fn list_all(&self, min_count: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .buckets
            .values()
            .filter(|b| b.records.len() >= min_count)
            .map(|b| (b.label.as_str(), b.records.len()))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// Whether the query hits a key exactly (after normalization).
    pub fn contains(&self, query: &str) -> bool {
        self.buckets.contains_key(&normalize_label(query))
    }

    /// Display labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.buckets.values().map(|b| b.label.as_str())
    }

    /// All records across all buckets, insertion order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buckets.values().flat_map(|b| b.records.iter())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total insertions across all buckets.
    pub fn total_records(&self) -> usize {
        self.buckets.values().map(|b| b.records.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Rec {
        id: String,
    }

    impl CladeRecord for Rec {
        fn record_id(&self) -> &str {
            &self.id
        }
    }

    fn rec(id: &str) -> Rec {
        Rec { id: id.to_string() }
    }

    fn u5_registry() -> CladeRegistry<Rec> {
        let mut reg = CladeRegistry::with_min_ancestor_len(2);
        reg.insert("U5", rec("a"));
        reg.insert("U5", rec("b"));
        reg.insert("U5", rec("c"));
        reg.insert("U5b1", rec("d"));
        reg
    }

    #[test]
    fn unmatched_descendant_falls_back_to_longest_ancestor() {
        let reg = u5_registry();
        let hits = reg.exact_or_nearest_ancestor("U5b1c2");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "d");
    }

    #[test]
    fn exact_key_beats_shorter_ancestor() {
        let reg = u5_registry();
        let hits = reg.exact_or_nearest_ancestor("U5B1");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "d");
    }

    #[test]
    fn subtree_unions_descendants_without_duplicates() {
        let mut reg = u5_registry();
        // same individual indexed under a second descendant key
        reg.insert("U5b1b", rec("d"));
        let hits = reg.subtree("U5");
        let ids: Vec<&str> = hits.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn matching_is_case_insensitive_and_marker_blind() {
        let reg = u5_registry();
        assert_eq!(reg.exact_or_nearest_ancestor("u5b1").len(), 1);
        assert_eq!(reg.exact_or_nearest_ancestor("U5b1~").len(), 1);
        assert_eq!(reg.subtree("u5").len(), 4);
    }

    #[test]
    fn ancestor_shorter_than_minimum_is_ignored() {
        let mut reg = CladeRegistry::with_min_ancestor_len(2);
        reg.insert("U", rec("root"));
        assert!(reg.exact_or_nearest_ancestor("U5b1").is_empty());
        // exact match is exempt from the minimum
        assert_eq!(reg.exact_or_nearest_ancestor("U").len(), 1);

        let mut curated = CladeRegistry::with_min_ancestor_len(1);
        curated.insert("U", rec("root"));
        assert_eq!(curated.exact_or_nearest_ancestor("U5b1").len(), 1);
    }

    #[test]
    fn ancestor_choice_ignores_insertion_order() {
        let mut forward = CladeRegistry::with_min_ancestor_len(2);
        forward.insert("U5", rec("coarse"));
        forward.insert("U5b", rec("fine"));
        let mut reversed = CladeRegistry::with_min_ancestor_len(2);
        reversed.insert("U5b", rec("fine"));
        reversed.insert("U5", rec("coarse"));

        assert_eq!(forward.exact_or_nearest_ancestor("U5b1c2")[0].id, "fine");
        assert_eq!(reversed.exact_or_nearest_ancestor("U5b1c2")[0].id, "fine");
    }

    #[test]
    fn unknown_and_empty_queries_yield_empty() {
        let reg = u5_registry();
        assert!(reg.exact_or_nearest_ancestor("H1a").is_empty());
        assert!(reg.exact_or_nearest_ancestor("").is_empty());
        assert!(reg.subtree("H").is_empty());
        assert_eq!(reg.count_matching("X99"), 0);
    }

    #[test]
    fn case_variant_spellings_share_one_bucket() {
        let mut reg = CladeRegistry::new();
        reg.insert("U5b1", rec("x"));
        reg.insert("U5B1", rec("y"));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.exact_or_nearest_ancestor("u5b1").len(), 2);
        // display keeps the first spelling
        assert_eq!(reg.labels().collect::<Vec<_>>(), vec!["U5b1"]);
    }

    #[test]
    fn count_matching_collapses_duplicate_ids() {
        let mut reg = CladeRegistry::new();
        reg.insert("U5", rec("dup"));
        reg.insert("U5", rec("dup"));
        reg.insert("U5", rec("other"));
        assert_eq!(reg.count_matching("U5"), 2);
    }

    #[test]
    fn list_all_sorts_by_count_descending() {
        let reg = u5_registry();
        let listing = reg.list_all(1);
        assert_eq!(listing, vec![("U5", 3), ("U5b1", 1)]);
        assert_eq!(reg.list_all(2), vec![("U5", 3)]);
        assert!(reg.list_all(4).is_empty());
    }
}
