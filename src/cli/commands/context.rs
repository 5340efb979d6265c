use anyhow::Context;
use clap::Args;
use colored::*;

use crate::adna::sample::Lineage;
use crate::adna::{markers, stories};
use crate::cli::output;

#[derive(Args)]
pub struct ContextArgs {
    /// Clade label to describe, e.g. "U5b1" or "N-TAT"
    pub clade: String,

    /// Lineage the label belongs to (maternal/mt or paternal/y)
    #[arg(short, long, default_value = "maternal")]
    pub lineage: String,
}

pub fn run(args: ContextArgs) -> anyhow::Result<()> {
    let lineage: Lineage = args
        .lineage
        .parse()
        .with_context(|| format!("bad --lineage value '{}'", args.lineage))?;

    output::section_header(&format!("basal context for {} ({})", args.clade, lineage));
    match markers::basal_context(&args.clade, lineage) {
        Some(marker) => {
            println!("{}  {}", marker.label.bold(), marker.origin_region);
            if let Some(year) = marker.origin_year {
                let era = if year < 0 {
                    format!("~{} BCE", -year)
                } else {
                    format!("~{} CE", year)
                };
                println!("origin {}", era);
            }
            println!("{}", marker.relevance);
            if let Some(note) = marker.disambiguation {
                println!("{} {}", "note:".yellow(), note);
            }
            if let Some(parent) = markers::parent_context(&args.clade, lineage) {
                println!("parent lineage: {} ({})", parent.label.bold(), parent.origin_region);
            }
            println!("refs: {}", marker.references.join("; "));
        }
        None => println!("{}", "no basal marker indexed for this label".yellow()),
    }

    output::section_header("narrative stories");
    let sequence = stories::era_sequence(&args.clade);
    if sequence.is_empty() {
        println!("{}", "no curated stories for this clade".yellow());
        return Ok(());
    }
    for (era, story) in sequence {
        println!(
            "{} {} — {} ({})",
            era.bold().green(),
            story.date_label,
            story.location,
            story.culture
        );
        println!("  [{}] {}", story.lineage_fit, story.context);
        println!("  refs: {}", story.references.join("; "));
    }
    Ok(())
}
