use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "jera",
    about = "jera — era-based change tracking for JSON documents",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Diff a document against its stored era state and commit the result
    Update(UpdateArgs),
    /// Print the stored era state without changing anything
    Show(ShowArgs),
}

#[derive(Args)]
pub struct UpdateArgs {
    /// The JSON document to track
    pub json: String,

    /// The era state file; created on the first run
    #[arg(long)]
    pub era: String,

    /// Pretty-print the era state file
    #[arg(short, long)]
    pub pretty: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// The era state file
    #[arg(long)]
    pub era: String,
}
