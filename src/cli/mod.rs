//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{Season, SeasonType};

/// Arguments shared by the game-log export pipeline.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Team full name, exactly as the provider spells it - repeatable:
    /// `-t "Indiana Pacers" -t "New York Knicks"`.
    #[clap(long, short = 't')]
    pub team: Vec<String>,

    /// File with one team full name per line (`#` comments and blank
    /// lines are ignored). Combined with any `--team` flags.
    #[clap(long)]
    pub teams_file: Option<PathBuf>,

    /// Season label (e.g. 2024-25).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Season type: regular-season, playoffs, pre-season or all-star.
    #[clap(long, default_value_t = SeasonType::default())]
    pub season_type: SeasonType,

    /// Root directory for the per-team output folders.
    #[clap(long, default_value = "data/players")]
    pub out_dir: PathBuf,

    /// Minimum courtesy delay after each provider call, in seconds.
    #[clap(long, default_value_t = 1.0)]
    pub min_delay: f64,

    /// Maximum courtesy delay after each provider call, in seconds.
    #[clap(long, default_value_t = 2.0)]
    pub max_delay: f64,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Print the static NBA franchise directory.
    TeamList {
        /// Output as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Resolve a team by full name and print its current roster.
    Roster {
        /// Team full name, exactly as the provider spells it.
        #[clap(long, short)]
        team: String,

        /// Season label (e.g. 2024-25).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Output as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Export per-player game logs as CSV files, one file per player.
    ///
    /// For each team: resolve the name, fetch the roster, then fetch every
    /// player's game log and write the cleaned table under
    /// `<out-dir>/<Team_Name>/<Player_Name>.csv`. Players without games for
    /// the requested season type are skipped.
    PlayerLogs {
        #[clap(flatten)]
        fetch: FetchArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nba-logs", about = "NBA game-log export CLI")]
pub struct NbaLogs {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from the NBA stats API
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
