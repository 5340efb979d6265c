/// Shared fixtures for the integration tests: writes small annotation tables
/// in the v54 header layout into a temp directory that lives as long as the
/// fixture value.
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

pub const V54_TERMINAL: &str = "Y haplogroup (manual curation in terminal mutation format)";
pub const V54_ISOGG: &str = "Y haplogroup (manual curation in ISOGG format)";

const HEADERS: &[&str] = &[
    "Genetic ID",
    "Group ID",
    "Locality",
    "Political Entity",
    "Lat.",
    "Long.",
    "Publication",
    "Date mean in BP",
    "mtDNA haplogroup",
    V54_TERMINAL,
    V54_ISOGG,
];

pub struct TableFixture {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TableFixture {
    /// A table with the v54 header row plus the given data rows.
    pub fn v54(rows: &[&[&str]]) -> Self {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("table.anno");
        let mut text = HEADERS.join("\t");
        text.push('\n');
        for row in rows {
            text.push_str(&row.join("\t"));
            text.push('\n');
        }
        fs::write(&path, text).expect("write fixture table");
        Self { _dir: dir, path }
    }

    /// The standard fixture most tests share. Columns:
    /// id, group, locality, country, lat, lon, publication, BP, mt, Y-term, Y-isogg.
    #[allow(dead_code)]
    pub fn standard() -> Self {
        Self::v54(&[
            &["S1", "Finland_IA", "Levänluhta", "Finland", "62.97", "22.33", "Lamnidis2018", "8400", "U5", "", ""],
            &["S2", "Sweden_MN", "Gotland", "Sweden", "..", "..", "Skoglund2014", "3000", "U5", "", ""],
            &["S3", "Norway_LN", "Steigen", "Norway", "67.78", "15.02", "Pub2020", "..", "U5", "", ""],
            &["S4", "Estonia_BA", "Saaremaa", "Estonia", "58.25", "22.48", "Saag2019", "5000", "U5b1", "", ""],
            &["S5", "Spain_EN", "Atapuerca", "Spain", "..", "..", "Pub2016", "2000", "X2c", "", ""],
            &["PANEL1", "French.DG", "Lyon", "France", "45.76", "4.84", "ReferencePanel", "0", "H1", "", ""],
            &["Y1", "Russia_MA", "Bolshoy Oleni Ostrov", "Russia", "68.6", "35.1", "Lamnidis2018", "1500", "..", "N-L550~", "N1c1a1a1a1"],
            &["Y2", "Russia_EBA", "Serteya", "Russia", "55.6", "31.5", "Saag2021", "4000", "", "N-M46", ""],
            &["Motala309-manual", "Sweden_Motala_7700BP", "Kanaljorden", "Sweden", "58.53", "15.03", "Mittnik2018", "7665", "U5a2d", "", ""],
            &["BAD1", "Grp", "Nowhere", "Nowhere", "..", "..", "Pub", "..", "n/a (female)", "..", ""],
        ])
    }
}
