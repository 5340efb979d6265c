pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kleio",
    version,
    about = "Clade-indexed ancient-DNA sample lookup",
    long_about = "Kleio ingests ancient-DNA annotation tables and curated sample \
                  registries and answers taxonomic queries against them: which \
                  samples are attributed to a clade, ordered by age, with \
                  ancestor fallback when the clade itself has no direct evidence."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up the samples attributed to a clade, oldest first
    Lookup(commands::lookup::LookupArgs),

    /// Retrieve the whole descendant cladeset under a label
    Subtree(commands::subtree::SubtreeArgs),

    /// List every indexed clade label with its sample count
    Clades(commands::clades::CladesArgs),

    /// Show curated basal-marker context and narrative stories for a clade
    Context(commands::context::ContextArgs),
}
