use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};

use crate::adna::sample::Lineage;
use crate::cli::output;
use crate::core::Config;
use crate::query::QueryEngine;

#[derive(Args)]
pub struct CladesArgs {
    /// Lineage to list (maternal/mt or paternal/y)
    #[arg(short, long, default_value = "maternal")]
    pub lineage: String,

    /// Annotation table path (defaults to the configured table)
    #[arg(short = 't', long, env = "KLEIO_ANNO_PATH", value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Hide clades with fewer samples than this
    #[arg(short = 'm', long, default_value = "1")]
    pub min_count: usize,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

pub fn run(args: CladesArgs) -> anyhow::Result<()> {
    let lineage: Lineage = args
        .lineage
        .parse()
        .with_context(|| format!("bad --lineage value '{}'", args.lineage))?;

    let engine = QueryEngine::new(&Config::default());
    let path = args.table.as_deref();
    let listing = engine.clade_listing(lineage, args.min_count, path)?;

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    output::section_header(&format!("{} clades with ≥{} sample(s)", lineage, args.min_count));
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Clade", "Samples"]);
    for (label, count) in &listing {
        table.add_row(vec![label.clone(), count.to_string()]);
    }
    println!("{}", table);
    println!("{} clade(s)", listing.len());
    Ok(())
}
