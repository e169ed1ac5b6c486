//! NBA Game-Log Export CLI Library
//!
//! Fetches basketball player statistics from the NBA stats API and persists
//! them as per-player CSV files, organized per team.
//!
//! ## Features
//!
//! - **Team Resolution**: Exact-match lookup of a team's full name against
//!   the static franchise directory
//! - **Roster Retrieval**: Current roster for any team and season
//! - **Game-Log Export**: Per-player game logs for a season + season type,
//!   cleaned to a fixed column set with derived combo stats (PRA/PR/PA/RA)
//! - **Rate-Limit Courtesy**: A randomized delay after every provider call
//! - **Failure Isolation**: One player's fetch error never aborts the run;
//!   failures are collected and reported at the end
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_logs::{commands::player_logs::*, Season, SeasonType};
//!
//! # async fn example() -> nba_logs::Result<()> {
//! let params = PlayerLogsParams {
//!     teams: vec!["Indiana Pacers".to_string()],
//!     season: Season::default(),
//!     season_type: SeasonType::Playoffs,
//!     // ... other parameters
//! #   teams_file: None,
//! #   out_dir: "data/players".into(),
//! #   min_delay: 1.0,
//! #   max_delay: 2.0,
//! };
//!
//! handle_player_logs(params).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod nba;
pub mod pipeline;

// Re-export commonly used types
pub use cli::types::{PlayerId, Season, SeasonType, TeamId};
pub use error::{NbaError, Result};
pub use nba::types::{GameLogRow, RosterEntry};
