//! Print the static franchise directory.

use crate::error::Result;
use crate::nba::teams::TEAMS;

pub fn handle_team_list(as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(TEAMS.as_slice())?);
    } else {
        for team in &TEAMS {
            println!("{}  {:<4} {}", team.id, team.abbreviation, team.full_name);
        }
    }
    Ok(())
}
