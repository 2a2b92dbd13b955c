use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sitecast", version, about = "Weather-driven construction scheduling")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run interactive setup
    Init,
    /// Validate config and test the weather connection
    Check,
    /// Current weather and its impact on each activity
    Current,
    /// Daily forecast summaries
    Forecast,
    /// Weekly schedule with cost implications
    Schedule(ScheduleArgs),
    /// Best and worst days per activity
    Recommend,
    /// Current weather, forecast and weekly schedule together
    Dashboard(ScheduleArgs),
}

#[derive(clap::Args, Default)]
pub struct ScheduleArgs {
    /// Workers on site (overrides config)
    #[arg(short, long)]
    pub labor: Option<i32>,

    /// Seed for the daily labor variation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep the crew size fixed every day
    #[arg(long)]
    pub no_jitter: bool,
}
