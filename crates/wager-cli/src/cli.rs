use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wager",
    about = "Betting performance dashboard for the terminal",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Display language tag (en, fr)
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// Bet sheet to read (TOML, or JSON by extension)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Dashboard configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print a one-line explanation under each section
    #[arg(long, global = true)]
    pub explain: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the summary cards
    Summary(SummaryArgs),
    /// Show the betting history table
    History(HistoryArgs),
    /// Show win/loss and bet type distributions
    Breakdown(BreakdownArgs),
    /// Show cumulative and per-bet profit trends
    Trend(TrendArgs),
    /// Check the bet sheet for data defects
    Validate(ValidateArgs),
    /// Write the derived ledger to a file
    Export(ExportArgs),
}

#[derive(Args)]
pub struct SummaryArgs {}

#[derive(Args)]
pub struct HistoryArgs {
    /// Show only the most recent N bets
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct BreakdownArgs {}

#[derive(Args)]
pub struct TrendArgs {
    #[arg(long, default_value = "24")]
    pub width: usize,
}

#[derive(Args)]
pub struct ValidateArgs {}

#[derive(Args)]
pub struct ExportArgs {
    #[arg(short, long, default_value = "betting-dashboard.json")]
    pub output: PathBuf,
}
