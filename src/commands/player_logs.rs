//! The game-log export pipeline.
//!
//! For each requested team: resolve the full name, fetch the roster,
//! create the team directory, then per roster entry fetch the game log,
//! clean it and write one CSV. Strictly sequential, with a randomized
//! courtesy delay after every provider call.
//!
//! A failure on one team or one player never aborts the run: failures are
//! collected and reported after the loop. The run only returns an error
//! when no requested team resolved at all.

use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Client;

use crate::{
    cli::types::{Season, SeasonType, TeamId},
    core::paths::team_dir,
    error::{NbaError, Result},
    nba::{
        http::{build_client, get_player_game_log, get_team_roster, throttle},
        teams::find_team_by_full_name,
        types::{GameLogRow, RosterEntry},
    },
    pipeline::{clean_player_logs, write_player_csv},
};

/// Configuration for one export run.
#[derive(Debug)]
pub struct PlayerLogsParams {
    pub teams: Vec<String>,
    pub teams_file: Option<PathBuf>,
    pub season: Season,
    pub season_type: SeasonType,
    pub out_dir: PathBuf,
    pub min_delay: f64,
    pub max_delay: f64,
}

/// One recorded failure; the run keeps going.
#[derive(Debug)]
pub struct Failure {
    pub team: String,
    pub player: Option<String>,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: usize,
    pub players_skipped: usize,
    pub failures: Vec<Failure>,
}

/// Run the export pipeline over every requested team.
pub async fn handle_player_logs(params: PlayerLogsParams) -> Result<()> {
    let team_names = collect_team_names(&params.teams, params.teams_file.as_deref())?;
    let client = build_client()?;

    let mut summary = RunSummary::default();
    let mut resolved_any = false;
    let mut first_resolution_error = None;

    for name in &team_names {
        let team = match find_team_by_full_name(name) {
            Ok(team) => {
                resolved_any = true;
                team
            }
            Err(e) => {
                eprintln!("⚠ {e}");
                summary.failures.push(Failure {
                    team: name.clone(),
                    player: None,
                    reason: e.to_string(),
                });
                if first_resolution_error.is_none() {
                    first_resolution_error = Some(e);
                }
                continue;
            }
        };

        println!("\nFetching roster for the {}.", team.full_name);
        let roster = match fetch_roster(&client, team.id, &params).await {
            Ok(roster) => roster,
            Err(e) => {
                eprintln!("⚠ Could not fetch the {} roster: {e}", team.full_name);
                summary.failures.push(Failure {
                    team: team.full_name.to_string(),
                    player: None,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let dir = team_dir(&params.out_dir, team.full_name);
        if let Err(e) = fs::create_dir_all(&dir) {
            eprintln!("⚠ Could not create {}: {e}", dir.display());
            summary.failures.push(Failure {
                team: team.full_name.to_string(),
                player: None,
                reason: e.to_string(),
            });
            continue;
        }

        for entry in &roster {
            match export_player(&client, entry, &dir, &params).await {
                Ok(Some(path)) => {
                    summary.files_written += 1;
                    println!("✓ {} saved to {}", entry.player_name, path.display());
                }
                Ok(None) => {
                    summary.players_skipped += 1;
                    println!(
                        "- {}: no {} games, skipped",
                        entry.player_name, params.season_type
                    );
                }
                Err(e) => {
                    eprintln!("⚠ {}: {e}", entry.player_name);
                    summary.failures.push(Failure {
                        team: team.full_name.to_string(),
                        player: Some(entry.player_name.clone()),
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    if !resolved_any {
        return Err(first_resolution_error.unwrap_or(NbaError::NoTeams));
    }

    print_summary(&summary);
    Ok(())
}

/// Fetch and parse one team roster. The throttle runs whether or not the
/// request succeeded: a rejected call still counts against the provider.
async fn fetch_roster(
    client: &Client,
    team_id: TeamId,
    params: &PlayerLogsParams,
) -> Result<Vec<RosterEntry>> {
    let response = get_team_roster(client, team_id, &params.season).await;
    throttle(params.min_delay, params.max_delay).await;
    RosterEntry::from_response(&response?)
}

/// Extract, transform and load one player's log. `Ok(None)` means no
/// games for the requested season type - an expected outcome, not a
/// failure.
async fn export_player(
    client: &Client,
    entry: &RosterEntry,
    dir: &Path,
    params: &PlayerLogsParams,
) -> Result<Option<PathBuf>> {
    let response =
        get_player_game_log(client, entry.player_id, &params.season, params.season_type).await;
    throttle(params.min_delay, params.max_delay).await;

    let rows = GameLogRow::from_response(&response?)?;
    let records = clean_player_logs(&entry.player_name, &rows);
    write_player_csv(&entry.player_name, dir, &records)
}

/// Merge `--team` flags with the teams file, preserving order. An empty
/// combined list is a named error, never an implicit default.
pub fn collect_team_names(teams: &[String], teams_file: Option<&Path>) -> Result<Vec<String>> {
    let mut names: Vec<String> = teams
        .iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if let Some(path) = teams_file {
        names.extend(read_teams_file(path)?);
    }

    if names.is_empty() {
        return Err(NbaError::NoTeams);
    }
    Ok(names)
}

/// One team full name per line; blank lines and `#` comments are ignored.
pub fn read_teams_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

fn print_summary(summary: &RunSummary) {
    println!(
        "\nDone: {} files written, {} players skipped (no games).",
        summary.files_written, summary.players_skipped
    );
    if !summary.failures.is_empty() {
        eprintln!("⚠ {} failures:", summary.failures.len());
        for failure in &summary.failures {
            match &failure.player {
                Some(player) => eprintln!("  {} / {player}: {}", failure.team, failure.reason),
                None => eprintln!("  {}: {}", failure.team, failure.reason),
            }
        }
    }
}
