//! The curated narrative registry: hand-written storytelling records keyed by
//! the shortest clade prefix that distinguishes them.
//!
//! These are not evidence samples — they are the editorial layer the report
//! pipeline draws scene-setting from. The registry reuses the same matching
//! engine as the annotation indexes but with a minimum ancestor length of 1,
//! because single-letter basal keys are exactly what this catalog indexes.

use once_cell::sync::Lazy;

use crate::adna::normalize::parse_period_label;
use crate::adna::registry::{CladeRecord, CladeRegistry};
use crate::adna::sample::Coordinates;

/// One curated narrative record.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryEntry {
    pub id: &'static str,
    /// The clade key this story is filed under.
    pub clade: &'static str,
    pub location: &'static str,
    /// Free-text period label, e.g. "3941-3661 BCE"; era sequencing reduces
    /// it to a representative year.
    pub date_label: &'static str,
    pub culture: &'static str,
    pub era: &'static str,
    pub coordinates: Option<Coordinates>,
    /// How closely the story's individual matches the queried lineage.
    pub lineage_fit: &'static str,
    pub context: &'static str,
    pub references: &'static [&'static str],
}

impl CladeRecord for StoryEntry {
    fn record_id(&self) -> &str {
        self.id
    }
}

const fn coords(lat: f64, lon: f64) -> Option<Coordinates> {
    Some(Coordinates { lat, lon })
}

static STORY_CATALOG: &[StoryEntry] = &[
    StoryEntry {
        id: "u5-cheddar",
        clade: "U5",
        location: "Gough's Cave, Cheddar Gorge, England",
        date_label: "about 8300 BCE",
        culture: "Western hunter-gatherers",
        era: "Mesolithic",
        coordinates: coords(51.282, -2.762),
        lineage_fit: "direct maternal line",
        context: "Cheddar Man, the best-known British Mesolithic individual, \
                  carried the U5 maternal lineage typical of the post-glacial \
                  forager population of western Europe.",
        references: &["Brace et al. 2019"],
    },
    StoryEntry {
        id: "u5-motala",
        clade: "U5",
        location: "Kanaljorden, Motala, Sweden",
        date_label: "5900-5700 BCE",
        culture: "Scandinavian hunter-gatherers",
        era: "Mesolithic",
        coordinates: coords(58.53, 15.03),
        lineage_fit: "direct maternal line",
        context: "The Motala burials preserve U5 foragers who fished the \
                  Motala Ström outlet long before farming reached the Baltic.",
        references: &["Mittnik et al. 2018"],
    },
    StoryEntry {
        id: "h1-doggerland",
        clade: "H1",
        location: "Franco-Cantabrian refugium, northern Iberia",
        date_label: "about 11000 BCE",
        culture: "Magdalenian late foragers",
        era: "Final Palaeolithic",
        coordinates: coords(43.3, -4.0),
        lineage_fit: "ancestral maternal line",
        context: "H1 expanded out of the Iberian refugium as the ice sheets \
                  retreated, becoming the most common maternal lineage in \
                  western Europe today.",
        references: &["Achilli et al. 2004"],
    },
    StoryEntry {
        id: "h1-t16189c-basque",
        clade: "H1-T16189C",
        location: "Basque Country, Spain",
        date_label: "3941-3661 BCE",
        culture: "Early Iberian farmers",
        era: "Neolithic",
        coordinates: coords(42.98, -2.62),
        lineage_fit: "exact maternal subclade",
        context: "The T16189C-defined branch of H1 concentrates around the \
                  western Pyrenees, tying its carriers to the farming \
                  communities that absorbed the local forager substrate.",
        references: &["Behar et al. 2012"],
    },
    StoryEntry {
        id: "r1b-bellbeaker",
        clade: "R1b",
        location: "Lower Rhine, Netherlands",
        date_label: "2500-2000 BCE",
        culture: "Bell Beaker complex",
        era: "Copper Age",
        coordinates: coords(51.9, 5.9),
        lineage_fit: "direct paternal line",
        context: "Beaker-using newcomers carrying steppe-derived R1b lineages \
                  replaced most of the earlier paternal gene pool of \
                  north-west Europe within a few centuries.",
        references: &["Olalde et al. 2018"],
    },
    StoryEntry {
        id: "r1b-yamnaya",
        clade: "R1b",
        location: "Pontic-Caspian steppe, Ukraine/Russia",
        date_label: "3300-2600 BCE",
        culture: "Yamnaya pastoralists",
        era: "Early Bronze Age",
        coordinates: coords(48.0, 40.0),
        lineage_fit: "ancestral paternal line",
        context: "Mobile Yamnaya herders spread R1b westward with wagons, \
                  horses and a new pastoral economy.",
        references: &["Haak et al. 2015"],
    },
    StoryEntry {
        id: "i1-nordic",
        clade: "I1",
        location: "Scania, southern Sweden",
        date_label: "300-800 AD",
        culture: "Iron Age and Vendel-period Scandinavians",
        era: "Iron Age",
        coordinates: coords(55.7, 13.4),
        lineage_fit: "direct paternal line",
        context: "I1 passed through a severe bottleneck and then expanded \
                  rapidly with the Iron Age populations of southern \
                  Scandinavia, making it a marker of Norse-era ancestry.",
        references: &["Margaryan et al. 2020"],
    },
    StoryEntry {
        id: "j2-anatolia",
        clade: "J2",
        location: "Çatalhöyük, central Anatolia",
        date_label: "about 7000 BCE",
        culture: "Anatolian early farmers",
        era: "Neolithic",
        coordinates: coords(37.666, 32.828),
        lineage_fit: "ancestral paternal line",
        context: "J2 rode the first farming expansion out of Anatolia into \
                  the Aegean and onward along the Mediterranean.",
        references: &["Lazaridis et al. 2016"],
    },
    StoryEntry {
        id: "n1-levanluhta",
        clade: "N1",
        location: "Levänluhta, Ostrobothnia, Finland",
        date_label: "300-800 AD",
        culture: "Iron Age Finns",
        era: "Iron Age",
        coordinates: coords(62.97, 22.33),
        lineage_fit: "direct paternal line",
        context: "The Levänluhta water burials carry the N lineage that \
                  arrived from Siberia with speakers of early Uralic, still \
                  the dominant paternal line around the Gulf of Bothnia.",
        references: &["Lamnidis et al. 2018"],
    },
    StoryEntry {
        id: "e1b1b-cardial",
        clade: "E1b1b",
        location: "Ifri n'Amr ou Moussa, Morocco",
        date_label: "about 5000 BCE",
        culture: "Early Maghreb farmers",
        era: "Neolithic",
        coordinates: coords(33.8, -6.1),
        lineage_fit: "direct paternal line",
        context: "E1b1b links the early Holocene populations of North Africa \
                  to the farming communities that later crossed into Iberia.",
        references: &["Fregel et al. 2018"],
    },
];

static STORIES: Lazy<CladeRegistry<StoryEntry>> = Lazy::new(|| {
    let mut reg = CladeRegistry::with_min_ancestor_len(1);
    for entry in STORY_CATALOG {
        reg.insert(entry.clade, entry.clone());
    }
    reg
});

/// Stories for a clade, via exact-or-nearest-ancestor matching.
pub fn stories_for(label: &str) -> &'static [StoryEntry] {
    STORIES.exact_or_nearest_ancestor(label)
}

/// A single story by its id, across all keys.
pub fn story_by_id(id: &str) -> Option<&'static StoryEntry> {
    STORIES.iter().find(|s| s.id == id)
}

/// The resolved stories ordered oldest to youngest by representative year,
/// undated entries last, paired with their era labels for narrative arcs.
pub fn era_sequence(label: &str) -> Vec<(&'static str, &'static StoryEntry)> {
    let mut entries: Vec<(&StoryEntry, Option<i32>)> = stories_for(label)
        .iter()
        .map(|s| (s, parse_period_label(s.date_label)))
        .collect();
    entries.sort_by(|a, b| match (a.1, b.1) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    entries.into_iter().map(|(s, _)| (s.era, s)).collect()
}

/// Every clade key the catalog can answer for, insertion order.
pub fn supported_labels() -> Vec<&'static str> {
    STORIES.labels().collect()
}
