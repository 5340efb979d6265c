//! Column-layout detection for annotation tables.
//!
//! Table releases rename columns freely ("Genetic ID" vs "Genetic_ID", short
//! Y-haplogroup headers vs the full Yfull-pipeline sentences), so nothing here
//! assumes a fixed column order. Each known release is a named profile with
//! its own candidate headers and a signature of exact headers that identifies
//! it; a table matching no signature still binds through the union candidate
//! lists and is tagged `Unknown`. The release tag feeds diagnostics only.

use std::fmt;

use csv::StringRecord;
use serde::{Deserialize, Serialize};

/// Known annotation-table releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaRelease {
    V62,
    V54,
    Unknown,
}

impl SchemaRelease {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaRelease::V62 => "v62",
            SchemaRelease::V54 => "v54",
            SchemaRelease::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SchemaRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Candidate headers for every logical field, in priority order.
struct HeaderCandidates {
    id: &'static [&'static str],
    group: &'static [&'static str],
    location: &'static [&'static str],
    country: &'static [&'static str],
    lat: &'static [&'static str],
    lon: &'static [&'static str],
    publication: &'static [&'static str],
    date_bp: &'static [&'static str],
    maternal: &'static [&'static str],
    paternal_terminal: &'static [&'static str],
    paternal_isogg: &'static [&'static str],
    paternal_manual: &'static [&'static str],
}

/// A release profile: candidates plus the exact headers whose joint presence
/// claims a table for this release.
struct SchemaProfile {
    release: SchemaRelease,
    signature: &'static [&'static str],
    candidates: HeaderCandidates,
}

const V62_Y_TERMINAL: &str = "Y haplogroup in terminal mutation notation automatically called based on Yfull with the software described in Lazaridis et al. Science 2022";
// The double space after "haplogroup" is present in the shipped header.
const V62_Y_ISOGG: &str = "Y haplogroup  in ISOGG v15.73 notation automatically called based on Yfull with the software described in Lazaridis et al. Science 2022";
const V62_Y_MANUAL: &str = "Y haplogroup manually called if different from automatic";
const DATE_BP_LONG: &str = "Date mean in BP in years before 1950 CE [OxCal mu for a direct radiocarbon date, and average of range for a contextual date]";
const V54_Y_TERMINAL: &str = "Y haplogroup (manual curation in terminal mutation format)";
const V54_Y_ISOGG: &str = "Y haplogroup (manual curation in ISOGG format)";

const V62_PROFILE: SchemaProfile = SchemaProfile {
    release: SchemaRelease::V62,
    signature: &[V62_Y_TERMINAL, V62_Y_ISOGG],
    candidates: HeaderCandidates {
        id: &["Genetic ID"],
        group: &["Group ID"],
        location: &["Locality"],
        country: &["Political Entity"],
        lat: &["Lat."],
        lon: &["Long."],
        publication: &["Publication abbreviation"],
        date_bp: &[DATE_BP_LONG, "Date mean in BP"],
        maternal: &["mtDNA haplogroup if >2x or published"],
        paternal_terminal: &[V62_Y_TERMINAL],
        paternal_isogg: &[V62_Y_ISOGG],
        paternal_manual: &[V62_Y_MANUAL],
    },
};

const V54_PROFILE: SchemaProfile = SchemaProfile {
    release: SchemaRelease::V54,
    signature: &[V54_Y_TERMINAL, V54_Y_ISOGG],
    candidates: HeaderCandidates {
        id: &["Genetic ID", "Genetic_ID"],
        group: &["Group ID", "Group_ID"],
        location: &["Locality", "Site"],
        country: &["Political Entity", "Country"],
        lat: &["Lat.", "Lat", "Latitude"],
        lon: &["Long.", "Long", "Longitude"],
        publication: &["Publication abbreviation", "Publication", "Reference"],
        date_bp: &[DATE_BP_LONG, "Date mean in BP"],
        maternal: &["mtDNA haplogroup if >2x or published", "mtDNA haplogroup"],
        paternal_terminal: &[V54_Y_TERMINAL, "Y haplogroup in terminal mutation notation"],
        paternal_isogg: &[V54_Y_ISOGG, "Y haplogroup in ISOGG format"],
        paternal_manual: &["Y haplogroup (manual override)"],
    },
};

/// Union lists for tables matching no signature. Order keeps the most
/// specific headers first so substring fallback cannot shadow them.
const FALLBACK_CANDIDATES: HeaderCandidates = HeaderCandidates {
    id: &["Genetic ID", "Genetic_ID"],
    group: &["Group ID", "Group_ID"],
    location: &["Locality", "Site"],
    country: &["Political Entity", "Country"],
    lat: &["Lat.", "Lat", "Latitude"],
    lon: &["Long.", "Long", "Longitude"],
    publication: &["Publication abbreviation", "Publication", "Reference"],
    date_bp: &[DATE_BP_LONG, "Date mean in BP"],
    maternal: &["mtDNA haplogroup if >2x or published", "mtDNA haplogroup"],
    paternal_terminal: &[
        V62_Y_TERMINAL,
        V54_Y_TERMINAL,
        "Y haplogroup in terminal mutation notation",
    ],
    paternal_isogg: &[V62_Y_ISOGG, V54_Y_ISOGG, "Y haplogroup in ISOGG format"],
    paternal_manual: &[V62_Y_MANUAL, "Y haplogroup (manual override)"],
};

/// Exact header match first, in candidate priority order, then a
/// case-insensitive substring pass. Returns the column index.
fn find_column(headers: &[String], candidates: &[&str]) -> Option<usize> {
    for cand in candidates {
        if let Some(i) = headers.iter().position(|h| h == cand) {
            return Some(i);
        }
    }
    for cand in candidates {
        let needle = cand.to_lowercase();
        if let Some(i) = headers
            .iter()
            .position(|h| h.to_lowercase().contains(&needle))
        {
            return Some(i);
        }
    }
    None
}

impl SchemaProfile {
    fn matches(&self, headers: &[String]) -> bool {
        self.signature
            .iter()
            .all(|sig| headers.iter().any(|h| h == sig))
    }
}

/// Logical field to column index, resolved once per table and reused for
/// every row.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    pub release: SchemaRelease,
    pub id: Option<usize>,
    pub group: Option<usize>,
    pub location: Option<usize>,
    pub country: Option<usize>,
    pub lat: Option<usize>,
    pub lon: Option<usize>,
    pub publication: Option<usize>,
    pub date_bp: Option<usize>,
    pub maternal: Option<usize>,
    pub paternal_terminal: Option<usize>,
    pub paternal_isogg: Option<usize>,
    pub paternal_manual: Option<usize>,
}

impl ColumnMap {
    pub fn detect(headers: &[String]) -> Self {
        for profile in [&V62_PROFILE, &V54_PROFILE] {
            if profile.matches(headers) {
                return Self::bind(profile.release, &profile.candidates, headers);
            }
        }
        Self::bind(SchemaRelease::Unknown, &FALLBACK_CANDIDATES, headers)
    }

    fn bind(release: SchemaRelease, cands: &HeaderCandidates, headers: &[String]) -> Self {
        Self {
            release,
            id: find_column(headers, cands.id),
            group: find_column(headers, cands.group),
            location: find_column(headers, cands.location),
            country: find_column(headers, cands.country),
            lat: find_column(headers, cands.lat),
            lon: find_column(headers, cands.lon),
            publication: find_column(headers, cands.publication),
            date_bp: find_column(headers, cands.date_bp),
            maternal: find_column(headers, cands.maternal),
            paternal_terminal: find_column(headers, cands.paternal_terminal),
            paternal_isogg: find_column(headers, cands.paternal_isogg),
            paternal_manual: find_column(headers, cands.paternal_manual),
        }
    }

    /// Trimmed field value, empty when the column is unmapped or the row is
    /// too short.
    pub fn field<'r>(&self, record: &'r StringRecord, idx: Option<usize>) -> &'r str {
        idx.and_then(|i| record.get(i)).map(str::trim).unwrap_or("")
    }

    /// A table is structurally usable only if rows can be identified and at
    /// least one clade column exists.
    pub fn is_usable(&self) -> bool {
        self.id.is_some()
            && (self.maternal.is_some()
                || self.paternal_terminal.is_some()
                || self.paternal_isogg.is_some()
                || self.paternal_manual.is_some())
    }
}
