//! Contextual annotations for basal clades.
//!
//! When a query is too specific for direct evidence, the report pipeline
//! falls back to describing the deep branch the clade hangs from: where the
//! lineage arose, when, and what it means narratively. Alias spellings are
//! inserted as extra registry keys for the same record, so "N-TAT" and
//! "N-M46" resolve to one marker.

use once_cell::sync::Lazy;

use crate::adna::registry::{CladeRecord, CladeRegistry};
use crate::adna::sample::Lineage;

/// Which lineage(s) a marker label is meaningful in. Short labels collide
/// between the two naming systems, so scope is checked on every lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineageScope {
    Maternal,
    Paternal,
    Both,
}

impl LineageScope {
    pub fn admits(&self, lineage: Lineage) -> bool {
        match self {
            LineageScope::Maternal => lineage == Lineage::Maternal,
            LineageScope::Paternal => lineage == Lineage::Paternal,
            LineageScope::Both => true,
        }
    }
}

/// One basal-clade annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct BasalMarker {
    pub label: &'static str,
    pub scope: LineageScope,
    /// Canonical label of the next marker up the tree, if annotated.
    pub parent: Option<&'static str>,
    pub origin_region: &'static str,
    /// Approximate signed origin year; negative = BCE.
    pub origin_year: Option<i32>,
    pub relevance: &'static str,
    /// Set when the same short label names a different clade in the other
    /// lineage.
    pub disambiguation: Option<&'static str>,
    pub references: &'static [&'static str],
    /// Alternate spellings indexed alongside the canonical label.
    aliases: &'static [&'static str],
}

impl CladeRecord for BasalMarker {
    fn record_id(&self) -> &str {
        self.label
    }
}

static MARKER_CATALOG: &[BasalMarker] = &[
    BasalMarker {
        label: "U",
        scope: LineageScope::Maternal,
        parent: None,
        origin_region: "West Asia",
        origin_year: Some(-44000),
        relevance: "the maternal macro-lineage of the earliest modern humans \
                    in Europe; most pre-farming Europeans carried a U branch",
        disambiguation: None,
        references: &["Fu et al. 2016"],
        aliases: &[],
    },
    BasalMarker {
        label: "U5",
        scope: LineageScope::Maternal,
        parent: Some("U"),
        origin_region: "Europe",
        origin_year: Some(-28000),
        relevance: "the signature maternal lineage of European \
                    hunter-gatherers from the glacial refugia onward",
        disambiguation: None,
        references: &["Malyarchuk et al. 2010"],
        aliases: &[],
    },
    BasalMarker {
        label: "H",
        scope: LineageScope::Maternal,
        parent: None,
        origin_region: "Southwest Asia",
        origin_year: Some(-23000),
        relevance: "today the most common European maternal lineage, spread \
                    with post-glacial recolonization and Neolithic farming",
        disambiguation: None,
        references: &["Achilli et al. 2004"],
        aliases: &[],
    },
    BasalMarker {
        label: "K",
        scope: LineageScope::Maternal,
        parent: Some("U"),
        origin_region: "Near East",
        origin_year: Some(-30000),
        relevance: "a U8-derived lineage carried strongly by the first \
                    farmers into Europe",
        disambiguation: None,
        references: &["Fernández et al. 2014"],
        aliases: &[],
    },
    BasalMarker {
        label: "J",
        scope: LineageScope::Maternal,
        parent: None,
        origin_region: "Near East",
        origin_year: Some(-43000),
        relevance: "a maternal lineage that expanded with Neolithic farmers \
                    into Europe",
        disambiguation: Some(
            "paternal J is a distinct West Asian Y lineage; see J2 for the \
             paternal marker",
        ),
        references: &["Pala et al. 2012"],
        aliases: &[],
    },
    BasalMarker {
        label: "T2",
        scope: LineageScope::Maternal,
        parent: None,
        origin_region: "Near East",
        origin_year: Some(-24000),
        relevance: "a farming-associated maternal lineage common in Neolithic \
                    Anatolia and its European offshoots",
        disambiguation: None,
        references: &["Mathieson et al. 2015"],
        aliases: &[],
    },
    BasalMarker {
        label: "R1b",
        scope: LineageScope::Paternal,
        parent: Some("R"),
        origin_region: "Pontic-Caspian steppe",
        origin_year: Some(-4500),
        relevance: "the dominant western-European paternal lineage, spread \
                    by Bronze Age steppe pastoralists",
        disambiguation: None,
        references: &["Haak et al. 2015"],
        aliases: &["R-M343"],
    },
    BasalMarker {
        label: "R1a",
        scope: LineageScope::Paternal,
        parent: Some("R"),
        origin_region: "Eastern European steppe",
        origin_year: Some(-4000),
        relevance: "the Corded Ware era paternal lineage of northern and \
                    eastern Europe",
        disambiguation: None,
        references: &["Allentoft et al. 2015"],
        aliases: &["R-M420"],
    },
    BasalMarker {
        label: "R",
        scope: LineageScope::Paternal,
        parent: None,
        origin_region: "Central Asia / Siberia",
        origin_year: Some(-26000),
        relevance: "the paternal macro-lineage ancestral to most European men \
                    today, first seen in Palaeolithic Siberia",
        disambiguation: Some(
            "maternal R is an unrelated basal mtDNA lineage carried by, \
             among others, the 45,000-year-old Ust'-Ishim individual",
        ),
        references: &["Raghavan et al. 2014"],
        aliases: &[],
    },
    BasalMarker {
        label: "I1",
        scope: LineageScope::Paternal,
        parent: Some("I"),
        origin_region: "Northern Europe",
        origin_year: Some(-2500),
        relevance: "the Scandinavian paternal lineage that expanded through \
                    the Nordic Iron Age",
        disambiguation: None,
        references: &["Margaryan et al. 2020"],
        aliases: &["I-M253"],
    },
    BasalMarker {
        label: "I",
        scope: LineageScope::Paternal,
        parent: None,
        origin_region: "Europe",
        origin_year: Some(-25000),
        relevance: "the native European paternal macro-lineage of the \
                    pre-farming hunter-gatherers",
        disambiguation: Some(
            "maternal I is a small N1-derived mtDNA lineage unrelated to \
             Y-chromosome I",
        ),
        references: &["Fu et al. 2016"],
        aliases: &[],
    },
    BasalMarker {
        label: "J2",
        scope: LineageScope::Paternal,
        parent: None,
        origin_region: "Anatolia / Caucasus",
        origin_year: Some(-16000),
        relevance: "a paternal lineage spread around the Mediterranean with \
                    early farming and later maritime networks",
        disambiguation: Some("maternal J2 is a branch of mtDNA J, not of this lineage"),
        references: &["Lazaridis et al. 2016"],
        aliases: &["J-M172"],
    },
    BasalMarker {
        label: "N-M46",
        scope: LineageScope::Paternal,
        parent: None,
        origin_region: "Siberia",
        origin_year: Some(-12000),
        relevance: "the Siberian paternal lineage carried westward with early \
                    Uralic speakers, dominant around the Baltic's eastern rim",
        disambiguation: Some(
            "maternal N is the basal mtDNA macro-lineage of all non-African \
             maternal lines; the shared letter is coincidence",
        ),
        references: &["Lamnidis et al. 2018", "Ilumäe et al. 2016"],
        aliases: &["N-TAT", "N1c", "N1c1", "N3"],
    },
    BasalMarker {
        label: "E1b1b",
        scope: LineageScope::Paternal,
        parent: None,
        origin_region: "Northeast Africa",
        origin_year: Some(-32000),
        relevance: "the North African paternal lineage that entered Iberia \
                    and the Balkans with Neolithic and later movements",
        disambiguation: None,
        references: &["Fregel et al. 2018"],
        aliases: &["E-M215"],
    },
];

static MARKERS: Lazy<CladeRegistry<BasalMarker>> = Lazy::new(|| {
    let mut reg = CladeRegistry::with_min_ancestor_len(1);
    for marker in MARKER_CATALOG {
        reg.insert(marker.label, marker.clone());
        for alias in marker.aliases {
            reg.insert(alias, marker.clone());
        }
    }
    reg
});

/// The best basal annotation for a label: exact-or-nearest-ancestor, then the
/// first resolved marker whose scope admits the lineage.
pub fn basal_context(label: &str, lineage: Lineage) -> Option<&'static BasalMarker> {
    MARKERS
        .exact_or_nearest_ancestor(label)
        .iter()
        .find(|m| m.scope.admits(lineage))
}

/// The annotated parent of the marker a label resolves to, one step up.
pub fn parent_context(label: &str, lineage: Lineage) -> Option<&'static BasalMarker> {
    let marker = basal_context(label, lineage)?;
    basal_context(marker.parent?, lineage)
}

/// Whether the label is itself an indexed basal key in this lineage.
pub fn is_basal(label: &str, lineage: Lineage) -> bool {
    MARKERS.contains(label)
        && MARKERS
            .exact_or_nearest_ancestor(label)
            .iter()
            .any(|m| m.scope.admits(lineage))
}

/// Canonical marker labels in scope, insertion order.
pub fn basal_labels(lineage: Lineage) -> Vec<&'static str> {
    let mut seen = std::collections::HashSet::new();
    MARKERS
        .iter()
        .filter(|m| m.scope.admits(lineage))
        .filter(|m| seen.insert(m.label))
        .map(|m| m.label)
        .collect()
}
