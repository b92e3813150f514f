use clap::{Args, Parser, Subcommand};

use notable_users::DEFAULT_MAX_BIRTH_YEAR;

/// Identify people by name against Wikipedia, falling back to an LLM.
///
/// Results are categorized by how notable and how well verified each
/// person is, then summarized in a batch report.
#[derive(Parser, Debug)]
#[command(name = "notable", about = "Identify and categorize people by name")]
pub struct CliArgs {
    /// Model override (defaults to OPENROUTER_MODEL)
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Print results as JSON instead of the text report
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Identify a single person
    Identify {
        first: String,
        last: String,
    },

    /// Identify a batch of "First Last" names
    Names {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Identify a random sample of people from randomuser.me
    Random(RandomArgs),
}

#[derive(Args, Debug)]
pub struct RandomArgs {
    /// How many users to fetch before filtering
    #[arg(long, default_value_t = 20)]
    pub fetch: usize,

    /// How many of the filtered users to identify
    #[arg(long, default_value_t = 5)]
    pub select: usize,

    /// Keep only users born in or before this year
    #[arg(long, default_value_t = DEFAULT_MAX_BIRTH_YEAR)]
    pub max_birth_year: i32,

    /// Concurrent identifications (overrides BATCH_CONCURRENCY)
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Research the best-known work of verified or notable people
    #[arg(long)]
    pub best_work: bool,
}
