//! Static NBA franchise directory and full-name lookup.
//!
//! Team ids are stable provider identifiers; resolution never touches the
//! network. Lookup is an exact (case-insensitive) match on the full name:
//! zero matches and multiple matches are both hard errors, a partial or
//! first-of-many match is never silently accepted.

use serde::Serialize;

use crate::cli::types::TeamId;
use crate::error::{NbaError, Result};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub abbreviation: &'static str,
    pub full_name: &'static str,
}

/// All 30 current NBA franchises.
pub static TEAMS: [Team; 30] = [
    Team { id: TeamId(1610612737), abbreviation: "ATL", full_name: "Atlanta Hawks" },
    Team { id: TeamId(1610612738), abbreviation: "BOS", full_name: "Boston Celtics" },
    Team { id: TeamId(1610612751), abbreviation: "BKN", full_name: "Brooklyn Nets" },
    Team { id: TeamId(1610612766), abbreviation: "CHA", full_name: "Charlotte Hornets" },
    Team { id: TeamId(1610612741), abbreviation: "CHI", full_name: "Chicago Bulls" },
    Team { id: TeamId(1610612739), abbreviation: "CLE", full_name: "Cleveland Cavaliers" },
    Team { id: TeamId(1610612742), abbreviation: "DAL", full_name: "Dallas Mavericks" },
    Team { id: TeamId(1610612743), abbreviation: "DEN", full_name: "Denver Nuggets" },
    Team { id: TeamId(1610612765), abbreviation: "DET", full_name: "Detroit Pistons" },
    Team { id: TeamId(1610612744), abbreviation: "GSW", full_name: "Golden State Warriors" },
    Team { id: TeamId(1610612745), abbreviation: "HOU", full_name: "Houston Rockets" },
    Team { id: TeamId(1610612754), abbreviation: "IND", full_name: "Indiana Pacers" },
    Team { id: TeamId(1610612746), abbreviation: "LAC", full_name: "LA Clippers" },
    Team { id: TeamId(1610612747), abbreviation: "LAL", full_name: "Los Angeles Lakers" },
    Team { id: TeamId(1610612763), abbreviation: "MEM", full_name: "Memphis Grizzlies" },
    Team { id: TeamId(1610612748), abbreviation: "MIA", full_name: "Miami Heat" },
    Team { id: TeamId(1610612749), abbreviation: "MIL", full_name: "Milwaukee Bucks" },
    Team { id: TeamId(1610612750), abbreviation: "MIN", full_name: "Minnesota Timberwolves" },
    Team { id: TeamId(1610612740), abbreviation: "NOP", full_name: "New Orleans Pelicans" },
    Team { id: TeamId(1610612752), abbreviation: "NYK", full_name: "New York Knicks" },
    Team { id: TeamId(1610612760), abbreviation: "OKC", full_name: "Oklahoma City Thunder" },
    Team { id: TeamId(1610612753), abbreviation: "ORL", full_name: "Orlando Magic" },
    Team { id: TeamId(1610612755), abbreviation: "PHI", full_name: "Philadelphia 76ers" },
    Team { id: TeamId(1610612756), abbreviation: "PHX", full_name: "Phoenix Suns" },
    Team { id: TeamId(1610612757), abbreviation: "POR", full_name: "Portland Trail Blazers" },
    Team { id: TeamId(1610612758), abbreviation: "SAC", full_name: "Sacramento Kings" },
    Team { id: TeamId(1610612759), abbreviation: "SAS", full_name: "San Antonio Spurs" },
    Team { id: TeamId(1610612761), abbreviation: "TOR", full_name: "Toronto Raptors" },
    Team { id: TeamId(1610612762), abbreviation: "UTA", full_name: "Utah Jazz" },
    Team { id: TeamId(1610612764), abbreviation: "WAS", full_name: "Washington Wizards" },
];

/// Resolve a team by its full display name.
pub fn find_team_by_full_name(name: &str) -> Result<&'static Team> {
    let trimmed = name.trim();
    let mut matches = TEAMS
        .iter()
        .filter(|t| t.full_name.eq_ignore_ascii_case(trimmed));

    match (matches.next(), matches.count()) {
        (Some(team), 0) => Ok(team),
        (Some(_), rest) => Err(NbaError::AmbiguousTeam {
            name: name.to_string(),
            count: rest + 1,
        }),
        (None, _) => Err(NbaError::TeamNotFound {
            name: name.to_string(),
        }),
    }
}
