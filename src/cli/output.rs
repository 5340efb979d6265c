//! Rendering helpers shared by the subcommands.

use colored::*;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};

use crate::adna::sample::Sample;

pub fn section_header(title: &str) {
    println!("\n{}", title.bold().cyan());
    println!("{}", "─".repeat(title.len()).cyan());
}

/// Spinner shown while a cold cache builds an index; a warm cache finishes
/// it immediately.
pub fn ingest_spinner(source: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("static spinner template"),
    );
    pb.set_message(format!("Indexing {}...", source));
    pb
}

pub fn sample_table(samples: &[Sample]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "ID", "Era", "Group", "Location", "Country", "mtDNA", "Y", "Publication",
        ]);
    for s in samples {
        table.add_row(vec![
            Cell::new(&s.id),
            Cell::new(s.era_label()),
            Cell::new(&s.group),
            Cell::new(&s.location),
            Cell::new(&s.country),
            Cell::new(s.maternal.as_deref().unwrap_or("-")),
            Cell::new(s.paternal.best().unwrap_or("-")),
            Cell::new(&s.publication),
        ]);
    }
    table
}

pub fn print_samples_json(samples: &[Sample]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(samples)?);
    Ok(())
}
