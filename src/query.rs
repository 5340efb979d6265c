//! The query facade: the one surface the report pipeline calls.
//!
//! Every operation runs the same pipeline: alias-resolve (paternal only),
//! fetch the cached index for the source path, delegate to the registry,
//! then filter, de-duplicate, sort and truncate. The facade owns the source
//! cache; callers own the facade.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::adna::alias;
use crate::adna::sample::{Lineage, Sample};
use crate::core::{Config, SourceCache};
use crate::ingest::SchemaRelease;
use crate::Result;

/// Samples dated 1940 CE or later, anchored 10 years before the BP zero
/// point of 1950.
const MODERN_YEAR_CUTOFF: i32 = 1940;

/// Group-label suffix marking modern diploid-genotype reference panels in
/// this table family. Dataset-specific; revisit before pointing the engine
/// at a differently curated source.
const MODERN_GROUP_SUFFIX: &str = ".DG";

/// Per-call knobs, applied in a fixed order after registry matching.
#[derive(Debug, Clone, Copy)]
pub struct QueryOptions {
    pub require_coordinates: bool,
    pub exclude_modern: bool,
    pub limit: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            require_coordinates: false,
            exclude_modern: true,
            limit: 10,
        }
    }
}

impl QueryOptions {
    pub fn with_require_coordinates(mut self, require: bool) -> Self {
        self.require_coordinates = require;
        self
    }

    pub fn with_exclude_modern(mut self, exclude: bool) -> Self {
        self.exclude_modern = exclude;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

pub struct QueryEngine {
    cache: SourceCache,
    default_path: PathBuf,
}

impl QueryEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            cache: SourceCache::new(),
            default_path: PathBuf::from(&config.source.annotation_table),
        }
    }

    pub fn with_default_path(path: impl Into<PathBuf>) -> Self {
        Self {
            cache: SourceCache::new(),
            default_path: path.into(),
        }
    }

    fn source(&self, path: Option<&Path>) -> PathBuf {
        path.map(Path::to_path_buf)
            .unwrap_or_else(|| self.default_path.clone())
    }

    /// Matched samples, oldest first, filtered and capped per `opts`.
    pub fn nearest_samples(
        &self,
        label: &str,
        lineage: Lineage,
        path: Option<&Path>,
        opts: QueryOptions,
    ) -> Result<Vec<Sample>> {
        let resolved = alias::resolve(label, lineage);
        let index = self.cache.index_for(&self.source(path))?;
        let hits = index
            .registry(lineage)
            .exact_or_nearest_ancestor(&resolved)
            .to_vec();
        Ok(finalize(hits, &opts))
    }

    /// The single oldest matched sample, if any dated sample matches.
    pub fn oldest_sample(
        &self,
        label: &str,
        lineage: Lineage,
        path: Option<&Path>,
        opts: QueryOptions,
    ) -> Result<Option<Sample>> {
        let samples = self.nearest_samples(label, lineage, path, opts.with_limit(1))?;
        Ok(samples.into_iter().next())
    }

    /// Matched samples whose country contains `country`, case-insensitively.
    pub fn samples_in_country(
        &self,
        label: &str,
        lineage: Lineage,
        country: &str,
        path: Option<&Path>,
        opts: QueryOptions,
    ) -> Result<Vec<Sample>> {
        let needle = country.to_lowercase();
        let resolved = alias::resolve(label, lineage);
        let index = self.cache.index_for(&self.source(path))?;
        let hits: Vec<Sample> = index
            .registry(lineage)
            .exact_or_nearest_ancestor(&resolved)
            .iter()
            .filter(|s| s.country.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(finalize(hits, &opts))
    }

    /// The whole descendant cladeset under a label, bounded by `opts.limit`.
    pub fn subtree_samples(
        &self,
        label: &str,
        lineage: Lineage,
        path: Option<&Path>,
        opts: QueryOptions,
    ) -> Result<Vec<Sample>> {
        let resolved = alias::resolve(label, lineage);
        let index = self.cache.index_for(&self.source(path))?;
        let hits: Vec<Sample> = index
            .registry(lineage)
            .subtree(&resolved)
            .into_iter()
            .cloned()
            .collect();
        Ok(finalize(hits, &opts))
    }

    /// Distinct samples a label resolves to, before filtering.
    pub fn sample_count(
        &self,
        label: &str,
        lineage: Lineage,
        path: Option<&Path>,
    ) -> Result<usize> {
        let resolved = alias::resolve(label, lineage);
        let index = self.cache.index_for(&self.source(path))?;
        Ok(index.registry(lineage).count_matching(&resolved))
    }

    /// Every indexed clade label with at least `min_count` records, by count
    /// descending.
    pub fn clade_listing(
        &self,
        lineage: Lineage,
        min_count: usize,
        path: Option<&Path>,
    ) -> Result<Vec<(String, usize)>> {
        let index = self.cache.index_for(&self.source(path))?;
        Ok(index
            .registry(lineage)
            .list_all(min_count)
            .into_iter()
            .map(|(label, count)| (label.to_string(), count))
            .collect())
    }

    /// The release tag detected for a source.
    pub fn release(&self, path: Option<&Path>) -> Result<SchemaRelease> {
        let index = self.cache.index_for(&self.source(path))?;
        Ok(index.release)
    }
}

/// Shared tail of every sample query: filter, de-duplicate by id, sort
/// oldest-first with undated samples trailing in original order, truncate.
fn finalize(samples: Vec<Sample>, opts: &QueryOptions) -> Vec<Sample> {
    let mut seen = std::collections::HashSet::new();
    let mut kept: Vec<Sample> = samples
        .into_iter()
        .filter(|s| !opts.require_coordinates || s.coordinates.is_some())
        .filter(|s| !opts.exclude_modern || !is_modern_reference(s))
        .filter(|s| seen.insert(s.id.clone()))
        .collect();
    kept.sort_by(|a, b| match (a.year, b.year) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    kept.truncate(opts.limit);
    kept
}

fn is_modern_reference(sample: &Sample) -> bool {
    matches!(sample.year, Some(y) if y >= MODERN_YEAR_CUTOFF)
        && sample.group.ends_with(MODERN_GROUP_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, year: Option<i32>) -> Sample {
        let mut s = Sample::new(id, "test").with_maternal("U5");
        s.year = year;
        s
    }

    #[test]
    fn finalize_sorts_oldest_first_with_undated_last() {
        let input = vec![
            sample("a", Some(-500)),
            sample("b", None),
            sample("c", Some(-6400)),
            sample("d", None),
            sample("e", Some(850)),
        ];
        let out = finalize(input, &QueryOptions::default());
        let ids: Vec<&str> = out.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "e", "b", "d"]);
    }

    #[test]
    fn finalize_drops_duplicate_ids_keeping_the_first() {
        let mut dup = sample("a", Some(100));
        dup.group = "second copy".into();
        let out = finalize(
            vec![sample("a", Some(100)), dup],
            &QueryOptions::default(),
        );
        assert_eq!(out.len(), 1);
        assert!(out[0].group.is_empty());
    }

    #[test]
    fn coordinate_filter_empties_a_coordinate_free_result() {
        let out = finalize(
            vec![sample("a", Some(100))],
            &QueryOptions::default().with_require_coordinates(true),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn modern_reference_needs_both_recency_and_suffix() {
        let mut panel = sample("panel", Some(1950));
        panel.group = "French.DG".into();
        assert!(is_modern_reference(&panel));

        let mut recent_burial = sample("burial", Some(1945));
        recent_burial.group = "Iceland_Modern".into();
        assert!(!is_modern_reference(&recent_burial));

        let mut old_dg = sample("old", Some(-3000));
        old_dg.group = "Ancient.DG".into();
        assert!(!is_modern_reference(&old_dg));

        let out = finalize(
            vec![panel.clone()],
            &QueryOptions::default().with_exclude_modern(false),
        );
        assert_eq!(out.len(), 1);
        let out = finalize(vec![panel], &QueryOptions::default());
        assert!(out.is_empty());
    }

    #[test]
    fn limit_truncates_after_sorting() {
        let input = vec![
            sample("young", Some(1000)),
            sample("old", Some(-9000)),
            sample("mid", Some(-2000)),
        ];
        let out = finalize(input, &QueryOptions::default().with_limit(2));
        let ids: Vec<&str> = out.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["old", "mid"]);
    }
}
