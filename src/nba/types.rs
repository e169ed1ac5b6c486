use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cli::types::PlayerId;
use crate::error::{NbaError, Result};

#[cfg(test)]
mod tests;

/// Result set holding a team's current roster.
pub const ROSTER_RESULT_SET: &str = "CommonTeamRoster";

/// Result set holding a player's per-game log.
pub const GAME_LOG_RESULT_SET: &str = "PlayerGameLog";

/// Tabular envelope every stats endpoint responds with: named result sets,
/// each a header list plus rows of untyped cells.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    #[serde(rename = "resultSets", default)]
    pub result_sets: Vec<ResultSet>,
}

impl StatsResponse {
    pub fn result_set(&self, name: &str) -> Result<&ResultSet> {
        self.result_sets
            .iter()
            .find(|rs| rs.name == name)
            .ok_or_else(|| NbaError::MissingResultSet {
                name: name.to_string(),
            })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Index of a column by header name.
    pub fn column(&self, header: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == header)
            .ok_or_else(|| NbaError::MissingColumn {
                result_set: self.name.clone(),
                column: header.to_string(),
            })
    }
}

// Stat cells are lenient: the provider nulls out numbers for games with no
// recorded value, and column selection is the only schema contract here.
fn int_cell(row: &[Value], idx: usize) -> i64 {
    match row.get(idx) {
        Some(v) => v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)).unwrap_or(0),
        None => 0,
    }
}

fn float_cell(row: &[Value], idx: usize) -> f64 {
    row.get(idx).and_then(Value::as_f64).unwrap_or(0.0)
}

fn str_cell(row: &[Value], idx: usize) -> String {
    row.get(idx)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// One player on a team roster at fetch time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntry {
    pub player_id: PlayerId,
    pub player_name: String,
}

impl RosterEntry {
    /// Parse the roster out of a `commonteamroster` response, in provider
    /// order. Identity cells are strict: a row without a usable name or id
    /// cannot be processed downstream.
    pub fn from_response(response: &StatsResponse) -> Result<Vec<RosterEntry>> {
        let rs = response.result_set(ROSTER_RESULT_SET)?;
        let name_col = rs.column("PLAYER")?;
        let id_col = rs.column("PLAYER_ID")?;

        rs.row_set
            .iter()
            .map(|row| {
                let name = row.get(name_col).and_then(Value::as_str).ok_or_else(|| {
                    NbaError::InvalidCell {
                        result_set: rs.name.clone(),
                        column: "PLAYER".to_string(),
                    }
                })?;
                let id = row.get(id_col).and_then(Value::as_i64).ok_or_else(|| {
                    NbaError::InvalidCell {
                        result_set: rs.name.clone(),
                        column: "PLAYER_ID".to_string(),
                    }
                })?;
                Ok(RosterEntry {
                    player_id: PlayerId::new(id),
                    player_name: name.to_string(),
                })
            })
            .collect()
    }
}

/// One game from a player's log, with only the columns the export keeps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameLogRow {
    pub game_date: String,
    pub matchup: String,
    pub wl: String,
    pub min: i64,
    pub pts: i64,
    pub reb: i64,
    pub ast: i64,
    pub fgm: i64,
    pub fga: i64,
    pub fg_pct: f64,
    pub fg3m: i64,
    pub fg3a: i64,
    pub fg3_pct: f64,
    pub ftm: i64,
    pub fta: i64,
    pub ft_pct: f64,
    pub oreb: i64,
    pub dreb: i64,
    pub stl: i64,
    pub blk: i64,
    pub tov: i64,
}

impl GameLogRow {
    /// Parse a `playergamelog` response, in provider order (typically
    /// reverse-chronological). An empty `rowSet` is an empty vec, not an
    /// error: a player who missed the cut simply has no games.
    pub fn from_response(response: &StatsResponse) -> Result<Vec<GameLogRow>> {
        let rs = response.result_set(GAME_LOG_RESULT_SET)?;

        let game_date = rs.column("GAME_DATE")?;
        let matchup = rs.column("MATCHUP")?;
        let wl = rs.column("WL")?;
        let min = rs.column("MIN")?;
        let pts = rs.column("PTS")?;
        let reb = rs.column("REB")?;
        let ast = rs.column("AST")?;
        let fgm = rs.column("FGM")?;
        let fga = rs.column("FGA")?;
        let fg_pct = rs.column("FG_PCT")?;
        let fg3m = rs.column("FG3M")?;
        let fg3a = rs.column("FG3A")?;
        let fg3_pct = rs.column("FG3_PCT")?;
        let ftm = rs.column("FTM")?;
        let fta = rs.column("FTA")?;
        let ft_pct = rs.column("FT_PCT")?;
        let oreb = rs.column("OREB")?;
        let dreb = rs.column("DREB")?;
        let stl = rs.column("STL")?;
        let blk = rs.column("BLK")?;
        let tov = rs.column("TOV")?;

        let rows = rs
            .row_set
            .iter()
            .map(|row| GameLogRow {
                game_date: str_cell(row, game_date),
                matchup: str_cell(row, matchup),
                wl: str_cell(row, wl),
                min: int_cell(row, min),
                pts: int_cell(row, pts),
                reb: int_cell(row, reb),
                ast: int_cell(row, ast),
                fgm: int_cell(row, fgm),
                fga: int_cell(row, fga),
                fg_pct: float_cell(row, fg_pct),
                fg3m: int_cell(row, fg3m),
                fg3a: int_cell(row, fg3a),
                fg3_pct: float_cell(row, fg3_pct),
                ftm: int_cell(row, ftm),
                fta: int_cell(row, fta),
                ft_pct: float_cell(row, ft_pct),
                oreb: int_cell(row, oreb),
                dreb: int_cell(row, dreb),
                stl: int_cell(row, stl),
                blk: int_cell(row, blk),
                tov: int_cell(row, tov),
            })
            .collect();

        Ok(rows)
    }
}
