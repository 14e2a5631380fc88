use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Multi-calendar date conversion and time zone queries"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./almanac.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a date between calendars
    Convert(ConvertArgs),
    /// Describe one year of a calendar
    Info(InfoArgs),
    /// Query offset and daylight saving state of a time zone
    Zone(ZoneArgs),
    /// List known time zone ids
    Zones(ZonesArgs),
}

#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Date as YYYY-MM-DD[THH:MM[:SS[.mmm]]], in the source calendar
    pub date: String,

    /// Source calendar (overrides [calendar].default)
    #[arg(long)]
    pub from: Option<String>,

    /// Target calendars, comma separated (default: all)
    #[arg(long, value_delimiter = ',')]
    pub to: Vec<String>,

    /// First day of the week for week-of-month (overrides config)
    #[arg(long)]
    pub first_day_of_week: Option<String>,
}

#[derive(clap::Args)]
pub struct InfoArgs {
    /// Calendar to describe (overrides [calendar].default)
    #[arg(long)]
    pub calendar: Option<String>,

    /// Year in that calendar
    #[arg(long, allow_hyphen_values = true)]
    pub year: i32,
}

#[derive(clap::Args)]
pub struct ZoneArgs {
    /// Zone id, or "local" (overrides [zones].default)
    #[arg(long, conflicts_with = "offset")]
    pub id: Option<String>,

    /// Fixed offset in minutes east of UTC instead of a zone id
    #[arg(long, allow_hyphen_values = true)]
    pub offset: Option<i32>,

    /// Gregorian UTC instant to query (default: now)
    #[arg(long)]
    pub at: Option<String>,

    /// Locale tag carried on the zone
    #[arg(long)]
    pub locale: Option<String>,
}

#[derive(clap::Args)]
pub struct ZonesArgs {
    /// Only list ids starting with this prefix
    #[arg(long)]
    pub prefix: Option<String>,
}
