use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use colored::*;

use crate::adna::sample::Lineage;
use crate::cli::output;
use crate::core::Config;
use crate::query::{QueryEngine, QueryOptions};

#[derive(Args)]
pub struct LookupArgs {
    /// Clade label to look up, e.g. "U5b1" or "N-L550"
    pub clade: String,

    /// Lineage to query (maternal/mt or paternal/y)
    #[arg(short, long, default_value = "maternal")]
    pub lineage: String,

    /// Annotation table path (defaults to the configured table)
    #[arg(short = 't', long, env = "KLEIO_ANNO_PATH", value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Maximum number of samples to show
    #[arg(short = 'n', long, default_value = "10")]
    pub limit: usize,

    /// Show only the single oldest sample
    #[arg(long)]
    pub oldest: bool,

    /// Keep only samples whose country contains this text
    #[arg(short, long)]
    pub country: Option<String>,

    /// Drop samples without coordinates
    #[arg(long)]
    pub require_coordinates: bool,

    /// Keep modern reference-panel samples in the result
    #[arg(long)]
    pub include_modern: bool,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

pub fn run(args: LookupArgs) -> anyhow::Result<()> {
    let lineage: Lineage = args
        .lineage
        .parse()
        .with_context(|| format!("bad --lineage value '{}'", args.lineage))?;
    let opts = QueryOptions::default()
        .with_require_coordinates(args.require_coordinates)
        .with_exclude_modern(!args.include_modern)
        .with_limit(if args.oldest { 1 } else { args.limit });

    let engine = QueryEngine::new(&Config::default());
    let path = args.table.as_deref();

    let spinner = output::ingest_spinner(
        &path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "configured table".to_string()),
    );
    let release = engine.release(path)?;
    let count = engine.sample_count(&args.clade, lineage, path)?;
    let samples = match &args.country {
        Some(country) => {
            engine.samples_in_country(&args.clade, lineage, country, path, opts)?
        }
        None => engine.nearest_samples(&args.clade, lineage, path, opts)?,
    };
    spinner.finish_and_clear();

    if args.format == "json" {
        return output::print_samples_json(&samples);
    }

    output::section_header(&format!("{} ({} lineage)", args.clade, lineage));
    println!(
        "release {}, {} matching sample(s), showing {}",
        release.to_string().bold(),
        count,
        samples.len()
    );
    if samples.is_empty() {
        println!("{}", "no samples after filtering".yellow());
        return Ok(());
    }
    println!("{}", output::sample_table(&samples));
    Ok(())
}
