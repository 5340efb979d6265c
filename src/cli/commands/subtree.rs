use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::adna::sample::Lineage;
use crate::cli::output;
use crate::core::Config;
use crate::query::{QueryEngine, QueryOptions};

#[derive(Args)]
pub struct SubtreeArgs {
    /// Ancestor clade label, e.g. "U5"
    pub clade: String,

    /// Lineage to query (maternal/mt or paternal/y)
    #[arg(short, long, default_value = "maternal")]
    pub lineage: String,

    /// Annotation table path (defaults to the configured table)
    #[arg(short = 't', long, env = "KLEIO_ANNO_PATH", value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Maximum number of samples to show
    #[arg(short = 'n', long, default_value = "50")]
    pub limit: usize,

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

pub fn run(args: SubtreeArgs) -> anyhow::Result<()> {
    let lineage: Lineage = args
        .lineage
        .parse()
        .with_context(|| format!("bad --lineage value '{}'", args.lineage))?;
    let opts = QueryOptions::default()
        .with_require_coordinates(args.require_coordinates)
        .with_exclude_modern(!args.include_modern)
        .with_limit(args.limit);

    let engine = QueryEngine::new(&Config::default());
    let path = args.table.as_deref();
    let samples = engine.subtree_samples(&args.clade, lineage, path, opts)?;

    if args.format == "json" {
        return output::print_samples_json(&samples);
    }

    output::section_header(&format!("descendants of {} ({} lineage)", args.clade, lineage));
    println!("{} sample(s)", samples.len());
    if !samples.is_empty() {
        println!("{}", output::sample_table(&samples));
    }
    Ok(())
}
