//! Annotation-table ingestion: one tab-delimited table plus the curated seed
//! catalog become two populated clade registries.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};

use crate::adna::normalize::{bp_to_calendar_year, clean_clade_label, parse_coordinates};
use crate::adna::registry::CladeRegistry;
use crate::adna::sample::{Lineage, PaternalLabels, Sample};
use crate::ingest::curated;
use crate::ingest::schema::{ColumnMap, SchemaRelease};
use crate::{KleioError, Result};

/// Ancestor-fallback floor for external tables: with ~20k rows a
/// single-letter key is too coarse to stand in for a specific clade.
const ANNOTATION_MIN_ANCESTOR_LEN: usize = 2;

/// Both lineage registries built from one source, plus its release tag.
/// Immutable once built; the cache shares it behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationIndex {
    pub maternal: CladeRegistry<Sample>,
    pub paternal: CladeRegistry<Sample>,
    pub release: SchemaRelease,
}

impl AnnotationIndex {
    pub fn registry(&self, lineage: Lineage) -> &CladeRegistry<Sample> {
        match lineage {
            Lineage::Maternal => &self.maternal,
            Lineage::Paternal => &self.paternal,
        }
    }
}

/// Build an index from a table on disk. A missing file is an expected data
/// gap: the index is still built from the curated catalog. A structurally
/// broken table (unreadable or headerless, or no usable columns) is an error.
pub fn load_annotation_index(path: &Path) -> Result<AnnotationIndex> {
    let mut maternal = CladeRegistry::with_min_ancestor_len(ANNOTATION_MIN_ANCESTOR_LEN);
    let mut paternal = CladeRegistry::with_min_ancestor_len(ANNOTATION_MIN_ANCESTOR_LEN);
    let mut release = SchemaRelease::Unknown;

    match File::open(path) {
        Ok(file) => {
            release = ingest_table(file, path, &mut maternal, &mut paternal)?;
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "annotation table not found, indexing curated records only");
        }
        Err(e) => return Err(KleioError::Io(e)),
    }

    for sample in curated::curated_samples() {
        insert_sample(sample, &mut maternal, &mut paternal);
    }

    info!(
        maternal = maternal.total_records(),
        paternal = paternal.total_records(),
        release = %release,
        "annotation index built"
    );

    Ok(AnnotationIndex {
        maternal,
        paternal,
        release,
    })
}

fn ingest_table(
    file: File,
    path: &Path,
    maternal: &mut CladeRegistry<Sample>,
    paternal: &mut CladeRegistry<Sample>,
) -> Result<SchemaRelease> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| {
            KleioError::Parse(format!("unreadable header row in {}: {}", path.display(), e))
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(KleioError::Parse(format!(
            "{}: missing header row",
            path.display()
        )));
    }

    let map = ColumnMap::detect(&headers);
    if !map.is_usable() {
        return Err(KleioError::Schema(format!(
            "{}: neither an id column nor any clade column recognized in {} headers",
            path.display(),
            headers.len()
        )));
    }
    debug!(release = %map.release, columns = headers.len(), "column layout detected");

    let mut kept = 0usize;
    let mut dropped = 0usize;
    for record in reader.records() {
        let record = record
            .map_err(|e| KleioError::Parse(format!("bad record in {}: {}", path.display(), e)))?;
        match parse_row(&record, &map) {
            Some(sample) => {
                insert_sample(sample, maternal, paternal);
                kept += 1;
            }
            None => dropped += 1,
        }
    }
    debug!(kept, dropped, "table rows processed");

    Ok(map.release)
}

/// One row to one sample. Rows without a single usable clade label are
/// dropped here, silently.
fn parse_row(record: &StringRecord, map: &ColumnMap) -> Option<Sample> {
    let maternal = clean_clade_label(map.field(record, map.maternal));
    let paternal = PaternalLabels {
        terminal: clean_clade_label(map.field(record, map.paternal_terminal)),
        isogg: clean_clade_label(map.field(record, map.paternal_isogg)),
        manual: clean_clade_label(map.field(record, map.paternal_manual)),
    };
    if maternal.is_none() && paternal.is_empty() {
        return None;
    }

    let mut sample = Sample::new(map.field(record, map.id), map.release.as_str())
        .with_group(map.field(record, map.group))
        .with_place(
            map.field(record, map.location),
            map.field(record, map.country),
        )
        .with_publication(map.field(record, map.publication));
    sample.maternal = maternal;
    sample.paternal = paternal;
    sample.coordinates =
        parse_coordinates(map.field(record, map.lat), map.field(record, map.lon));
    sample.year = bp_to_calendar_year(map.field(record, map.date_bp));
    Some(sample)
}

/// One insertion per lineage key. The maternal label is a single key; the
/// paternal side indexes every present naming variant.
fn insert_sample(
    sample: Sample,
    maternal: &mut CladeRegistry<Sample>,
    paternal: &mut CladeRegistry<Sample>,
) {
    if let Some(mt) = sample.maternal.clone() {
        maternal.insert(&mt, sample.clone());
    }
    for key in sample.paternal.index_keys() {
        paternal.insert(&key, sample.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v54_map() -> (Vec<String>, ColumnMap) {
        let headers: Vec<String> = [
            "Genetic ID",
            "Group ID",
            "Locality",
            "Political Entity",
            "Lat.",
            "Long.",
            "Publication",
            "Date mean in BP",
            "mtDNA haplogroup",
            "Y haplogroup (manual curation in terminal mutation format)",
            "Y haplogroup (manual curation in ISOGG format)",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect();
        let map = ColumnMap::detect(&headers);
        (headers, map)
    }

    fn row(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn row_with_both_lineages_parses_fully() {
        let (_, map) = v54_map();
        let record = row(&[
            "I0001", "Finland_IA", "Levänluhta", "Finland", "62.97", "22.33", "Lamnidis2018",
            "1550", "U5a1a1a'b'd", "N-L550~", "N1c1a1a1a1",
        ]);
        let sample = parse_row(&record, &map).unwrap();
        assert_eq!(sample.id, "I0001");
        assert_eq!(sample.maternal.as_deref(), Some("U5a1a1a'b'd"));
        assert_eq!(sample.paternal.best(), Some("N-L550~"));
        assert_eq!(
            sample.paternal.index_keys(),
            vec!["N-L550".to_string(), "N1c1a1a1a1".to_string()]
        );
        assert_eq!(sample.year, Some(400));
        let coords = sample.coordinates.unwrap();
        assert!((coords.lat - 62.97).abs() < 1e-9);
        assert_eq!(sample.provenance, "v54");
    }

    #[test]
    fn row_with_only_sentinel_labels_is_dropped() {
        let (_, map) = v54_map();
        let record = row(&[
            "I0002", "Grp", "Somewhere", "Nowhere", "..", "..", "Pub", "..", "n/a (female)",
            "..", "",
        ]);
        assert!(parse_row(&record, &map).is_none());
    }

    #[test]
    fn bad_coordinates_and_dates_degrade_to_absent() {
        let (_, map) = v54_map();
        let record = row(&[
            "I0003", "Grp", "Somewhere", "Nowhere", "61.0", "..", "Pub", "not dated", "H1a",
            "", "",
        ]);
        let sample = parse_row(&record, &map).unwrap();
        assert!(sample.coordinates.is_none());
        assert!(sample.year.is_none());
        assert_eq!(sample.maternal.as_deref(), Some("H1a"));
    }

    #[test]
    fn short_rows_read_missing_fields_as_empty() {
        let (_, map) = v54_map();
        let record = row(&["I0004", "Grp", "Somewhere", "Nowhere", "1.0", "2.0", "Pub", "900", "K1a"]);
        let sample = parse_row(&record, &map).unwrap();
        assert!(sample.paternal.is_empty());
        assert_eq!(sample.year, Some(1050));
    }

    #[test]
    fn insertion_indexes_every_paternal_variant_once() {
        let mut maternal = CladeRegistry::with_min_ancestor_len(2);
        let mut paternal = CladeRegistry::with_min_ancestor_len(2);
        let sample = Sample::new("X1", "test")
            .with_maternal("U5b1")
            .with_terminal("N-L550~")
            .with_isogg("N1c1a1a1a1")
            .with_manual("N-L550");
        insert_sample(sample, &mut maternal, &mut paternal);

        assert_eq!(maternal.total_records(), 1);
        // manual and terminal collapse to one key after marker stripping
        assert_eq!(paternal.len(), 2);
        assert_eq!(paternal.exact_or_nearest_ancestor("N-L550").len(), 1);
        assert_eq!(paternal.exact_or_nearest_ancestor("N1c1a1a1a1").len(), 1);
    }
}
