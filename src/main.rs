//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_logs::{
    cli::{Commands, GetCmd, NbaLogs},
    commands::{
        player_logs::{handle_player_logs, PlayerLogsParams},
        roster::handle_roster,
        team_list::handle_team_list,
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = NbaLogs::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::TeamList { json } => handle_team_list(json)?,

            GetCmd::Roster { team, season, json } => handle_roster(&team, season, json).await?,

            GetCmd::PlayerLogs { fetch } => {
                handle_player_logs(PlayerLogsParams {
                    teams: fetch.team,
                    teams_file: fetch.teams_file,
                    season: fetch.season,
                    season_type: fetch.season_type,
                    out_dir: fetch.out_dir,
                    min_delay: fetch.min_delay,
                    max_delay: fetch.max_delay,
                })
                .await?
            }
        },
    }

    Ok(())
}
