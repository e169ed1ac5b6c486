//! Resolve one team and print its current roster.

use crate::{
    cli::types::Season,
    error::Result,
    nba::{
        http::{build_client, get_team_roster},
        teams::find_team_by_full_name,
        types::RosterEntry,
    },
};

/// One fetch, then exit: the standalone view of the pipeline's first
/// stage. No courtesy delay - nothing follows the single call.
pub async fn handle_roster(team_name: &str, season: Season, as_json: bool) -> Result<()> {
    let team = find_team_by_full_name(team_name)?;
    let client = build_client()?;

    let response = get_team_roster(&client, team.id, &season).await?;
    let roster = RosterEntry::from_response(&response)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&roster)?);
    } else {
        println!(
            "{} ({}) roster, {} season - {} players",
            team.full_name,
            team.abbreviation,
            season,
            roster.len()
        );
        for entry in &roster {
            println!("  {:>8}  {}", entry.player_id, entry.player_name);
        }
    }

    Ok(())
}
