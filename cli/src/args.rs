use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "degrees")]
#[command(about = "Find the degrees of separation between two movie stars")]
pub struct Args {
    /// First person's name (prompted for when omitted)
    pub name1: Option<String>,

    /// Second person's name (prompted for when omitted)
    pub name2: Option<String>,

    /// Dataset directory containing people.csv, movies.csv and stars.csv
    #[arg(short, long, value_name = "DIR", default_value = "large")]
    pub data: PathBuf,

    /// Reject datasets whose credits reference unknown people or movies
    #[arg(long)]
    pub strict_links: bool,

    /// Output the result as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Show person IDs in output
    #[arg(short = 'i', long)]
    pub show_ids: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the connection chain
    #[arg(short, long)]
    pub quiet: bool,
}
