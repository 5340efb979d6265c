//! Field-level cleaning for raw annotation values.
//!
//! Annotation tables encode "missing" a dozen ways; everything here maps those
//! to `None` and leaves real values untouched.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::adna::sample::Coordinates;

/// Values that mean "no data" after lowercasing, matched exactly.
const MISSING_EXACT: &[&str] = &["..", "na", "no", "not published", "not published in paper"];

/// Values that mean "no data" when the cleaned value merely starts with them,
/// e.g. "n/a (female)" or "Neanderthal published in ...".
const MISSING_PREFIXES: &[&str] = &["n/a", "neanderthal"];

/// Trim a raw clade value and map missing-value sentinels to `None`.
/// Anything else is accepted verbatim, unvalidated.
pub fn clean_clade_label(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_lowercase();
    if MISSING_EXACT.contains(&lower.as_str()) {
        return None;
    }
    if MISSING_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return None;
    }
    Some(trimmed.to_string())
}

/// Parse a latitude/longitude pair. A sample has both or neither, so one
/// unparsable field discards both.
pub fn parse_coordinates(lat_raw: &str, lon_raw: &str) -> Option<Coordinates> {
    let lat: f64 = lat_raw.trim().parse().ok()?;
    let lon: f64 = lon_raw.trim().parse().ok()?;
    Some(Coordinates { lat, lon })
}

/// Convert a years-before-present value (BP, anchored at 1950) to a signed
/// calendar year. Negative = BCE. Unparsable input is an undated sample.
pub fn bp_to_calendar_year(raw: &str) -> Option<i32> {
    let bp: f64 = raw.trim().parse().ok()?;
    Some((1950.0 - bp).round() as i32)
}

static PERIOD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:[-\u{2013}\u{2014}]\s*(\d+))?\s*(BCE|BC|CE|AD)?").unwrap()
});

/// Reduce a free-text period label ("3941-3661 BCE", "about 5500 BCE",
/// "300-800 AD") to one representative signed year: the midpoint of a range,
/// the year itself otherwise. Used for era sequencing of curated records,
/// never for annotation-table rows.
pub fn parse_period_label(label: &str) -> Option<i32> {
    let caps = PERIOD_RE.captures(label)?;
    let first: i64 = caps.get(1)?.as_str().parse().ok()?;
    let second: i64 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => first,
    };
    let mid = (first + second) / 2;
    let is_bce = caps
        .get(3)
        .map(|m| matches!(m.as_str().to_ascii_uppercase().as_str(), "BCE" | "BC"))
        .unwrap_or(false);
    Some(if is_bce { -mid as i32 } else { mid as i32 })
}
