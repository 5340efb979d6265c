use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::adna::registry::CladeRecord;
use crate::KleioError;

/// Which of the two independently indexed marker systems a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lineage {
    Maternal,
    Paternal,
}

impl Lineage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lineage::Maternal => "maternal",
            Lineage::Paternal => "paternal",
        }
    }
}

impl FromStr for Lineage {
    type Err = KleioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mt" | "mtdna" | "maternal" => Ok(Lineage::Maternal),
            "y" | "ydna" | "paternal" => Ok(Lineage::Paternal),
            other => Err(KleioError::Other(format!("unknown lineage: {}", other))),
        }
    }
}

impl fmt::Display for Lineage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Decimal latitude/longitude. A sample carries both or neither.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// The paternal clade label in each naming convention it was published under.
///
/// A record is indexed under every present variant; `best()` picks the single
/// display label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaternalLabels {
    pub terminal: Option<String>,
    pub isogg: Option<String>,
    pub manual: Option<String>,
}

impl PaternalLabels {
    /// Display label: manual override wins, then terminal, then ISOGG.
    pub fn best(&self) -> Option<&str> {
        self.manual
            .as_deref()
            .or(self.terminal.as_deref())
            .or(self.isogg.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.manual.is_none() && self.terminal.is_none() && self.isogg.is_none()
    }

    /// Every distinct label this record should be indexed under, with the
    /// trailing uncertainty marker stripped. Order: manual, terminal, ISOGG.
    pub fn index_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::new();
        for label in [&self.manual, &self.terminal, &self.isogg]
            .into_iter()
            .flatten()
        {
            let key = label.trim_end_matches('~').trim().to_string();
            if !key.is_empty() && !keys.iter().any(|k| k.eq_ignore_ascii_case(&key)) {
                keys.push(key);
            }
        }
        keys
    }
}

/// One ancient individual, parsed from an annotation-table row or seeded from
/// the curated catalog. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub id: String,
    pub group: String,
    pub location: String,
    pub country: String,
    pub coordinates: Option<Coordinates>,
    /// Signed calendar year; negative = BCE. `None` when undated.
    pub year: Option<i32>,
    pub publication: String,
    pub maternal: Option<String>,
    pub paternal: PaternalLabels,
    /// Where the record came from: a release tag or a curated citation key.
    pub provenance: String,
}

impl Sample {
    pub fn new(id: impl Into<String>, provenance: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            group: String::new(),
            location: String::new(),
            country: String::new(),
            coordinates: None,
            year: None,
            publication: String::new(),
            maternal: None,
            paternal: PaternalLabels::default(),
            provenance: provenance.into(),
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn with_place(mut self, location: impl Into<String>, country: impl Into<String>) -> Self {
        self.location = location.into();
        self.country = country.into();
        self
    }

    pub fn with_coordinates(mut self, lat: f64, lon: f64) -> Self {
        self.coordinates = Some(Coordinates { lat, lon });
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_publication(mut self, publication: impl Into<String>) -> Self {
        self.publication = publication.into();
        self
    }

    pub fn with_maternal(mut self, label: impl Into<String>) -> Self {
        self.maternal = Some(label.into());
        self
    }

    pub fn with_terminal(mut self, label: impl Into<String>) -> Self {
        self.paternal.terminal = Some(label.into());
        self
    }

    pub fn with_isogg(mut self, label: impl Into<String>) -> Self {
        self.paternal.isogg = Some(label.into());
        self
    }

    pub fn with_manual(mut self, label: impl Into<String>) -> Self {
        self.paternal.manual = Some(label.into());
        self
    }

    /// At least one clade label in either lineage. Rows failing this are
    /// dropped at ingestion and never stored.
    pub fn has_clade_label(&self) -> bool {
        self.maternal.is_some() || !self.paternal.is_empty()
    }

    /// The label shown for the requested lineage, if any.
    pub fn display_label(&self, lineage: Lineage) -> Option<&str> {
        match lineage {
            Lineage::Maternal => self.maternal.as_deref(),
            Lineage::Paternal => self.paternal.best(),
        }
    }

    /// Human-readable era tag for diagnostics, e.g. "6400 BCE" or "850 CE".
    pub fn era_label(&self) -> String {
        match self.year {
            Some(y) if y < 0 => format!("{} BCE", -y),
            Some(y) => format!("{} CE", y),
            None => "undated".to_string(),
        }
    }
}

impl CladeRecord for Sample {
    fn record_id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lineage_parses_both_conventions() {
        assert_eq!("mt".parse::<Lineage>().unwrap(), Lineage::Maternal);
        assert_eq!("Y".parse::<Lineage>().unwrap(), Lineage::Paternal);
        assert_eq!("maternal".parse::<Lineage>().unwrap(), Lineage::Maternal);
        assert!("autosomal".parse::<Lineage>().is_err());
    }

    #[test]
    fn best_paternal_prefers_manual_then_terminal() {
        let labels = PaternalLabels {
            terminal: Some("R-L151".into()),
            isogg: Some("R1b1a1b1a1a".into()),
            manual: Some("R-P312".into()),
        };
        assert_eq!(labels.best(), Some("R-P312"));

        let no_manual = PaternalLabels {
            manual: None,
            ..labels
        };
        assert_eq!(no_manual.best(), Some("R-L151"));
    }

    #[test]
    fn index_keys_strip_marker_and_collapse_duplicates() {
        let labels = PaternalLabels {
            terminal: Some("N-L550~".into()),
            isogg: Some("N-L550".into()),
            manual: None,
        };
        assert_eq!(labels.index_keys(), vec!["N-L550".to_string()]);
    }

    #[test]
    fn index_keys_keep_distinct_conventions() {
        let labels = PaternalLabels {
            terminal: Some("I-M253".into()),
            isogg: Some("I1a".into()),
            manual: None,
        };
        assert_eq!(
            labels.index_keys(),
            vec!["I-M253".to_string(), "I1a".to_string()]
        );
    }

    #[test]
    fn era_label_formats_both_eras() {
        let s = Sample::new("X1", "test").with_year(-6400);
        assert_eq!(s.era_label(), "6400 BCE");
        let s = Sample::new("X2", "test").with_year(850);
        assert_eq!(s.era_label(), "850 CE");
        let s = Sample::new("X3", "test");
        assert_eq!(s.era_label(), "undated");
    }
}
