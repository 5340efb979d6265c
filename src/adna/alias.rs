//! Canonicalization of legacy paternal clade spellings.
//!
//! The N-M46 cluster has been renamed repeatedly across nomenclature
//! revisions (N3, N1c, N1c1, N-TAT, ...), and published tables use whichever
//! spelling was current. Queries are rewritten to one canonical label before
//! they reach the registry. Maternal labels are never rewritten: a short
//! label can name different clades in the two lineages, so blind aliasing
//! there is unsafe.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::adna::sample::Lineage;

/// Legacy/alternate spelling (uppercase) to canonical label. Canonical labels
/// map to themselves so resolution is a fixed point.
static PATERNAL_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("N-M46", "N-M46"),
        ("N-TAT", "N-M46"),
        ("N-P105", "N-M46"),
        ("N-M178", "N-M46"),
        ("N3", "N-M46"),
        ("N1C", "N-M46"),
        ("N1C1", "N-M46"),
        ("N-L1026", "N-L1026"),
        ("N-VL29", "N-L1026"),
        ("N1C1A1A", "N-L1026"),
        ("N-L550", "N-L550"),
        ("N1C1A1A1A1", "N-L550"),
        ("N-Z1936", "N-Z1936"),
        ("N-Z1925", "N-Z1936"),
        ("N1C1A1A1A2", "N-Z1936"),
    ])
});

/// Rewrite a query label to its canonical spelling. Exact, case-insensitive
/// table lookup; anything unresolved passes through unchanged.
pub fn resolve(label: &str, lineage: Lineage) -> String {
    if lineage != Lineage::Paternal {
        return label.to_string();
    }
    let key = label.trim().to_uppercase();
    match PATERNAL_ALIASES.get(key.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_spellings_rewrite_to_canonical() {
        assert_eq!(resolve("N-TAT", Lineage::Paternal), "N-M46");
        assert_eq!(resolve("n1c1", Lineage::Paternal), "N-M46");
        assert_eq!(resolve(" N-VL29 ", Lineage::Paternal), "N-L1026");
        assert_eq!(resolve("N1c1a1a1a2", Lineage::Paternal), "N-Z1936");
    }

    #[test]
    fn canonical_labels_are_fixed_points() {
        for canonical in ["N-M46", "N-L1026", "N-L550", "N-Z1936"] {
            assert_eq!(resolve(canonical, Lineage::Paternal), canonical);
        }
    }

    #[test]
    fn unknown_labels_pass_through_unchanged() {
        assert_eq!(resolve("R-L151", Lineage::Paternal), "R-L151");
        assert_eq!(resolve("u5b1", Lineage::Paternal), "u5b1");
    }

    #[test]
    fn maternal_labels_are_never_rewritten() {
        assert_eq!(resolve("N1c", Lineage::Maternal), "N1c");
        assert_eq!(resolve("N-TAT", Lineage::Maternal), "N-TAT");
    }

    #[test]
    fn alias_is_exact_match_only_no_prefix_logic() {
        assert_eq!(resolve("N-TAT1a", Lineage::Paternal), "N-TAT1a");
    }
}
