use serde::Serialize;

use crate::nba::types::GameLogRow;


/// The fixed output column set, in output order. Everything else the
/// provider sends is discarded.
pub const OUTPUT_COLUMNS: [&str; 26] = [
    "PLAYER_NAME",
    "GAME_DATE",
    "MATCHUP",
    "WL",
    "MIN",
    "PTS",
    "REB",
    "AST",
    "PRA",
    "PR",
    "PA",
    "RA",
    "FGM",
    "FGA",
    "FG_PCT",
    "FG3M",
    "FG3A",
    "FG3_PCT",
    "FTM",
    "FTA",
    "FT_PCT",
    "OREB",
    "DREB",
    "STL",
    "BLK",
    "TOV",
];

/// One cleaned output row. Field order matches [`OUTPUT_COLUMNS`]; the
/// CSV writer derives the header row from the serde renames.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerLogRecord {
    #[serde(rename = "PLAYER_NAME")]
    pub player_name: String,
    #[serde(rename = "GAME_DATE")]
    pub game_date: String,
    #[serde(rename = "MATCHUP")]
    pub matchup: String,
    #[serde(rename = "WL")]
    pub wl: String,
    #[serde(rename = "MIN")]
    pub min: i64,
    #[serde(rename = "PTS")]
    pub pts: i64,
    #[serde(rename = "REB")]
    pub reb: i64,
    #[serde(rename = "AST")]
    pub ast: i64,
    /// Points + rebounds + assists.
    #[serde(rename = "PRA")]
    pub pra: i64,
    /// Points + rebounds.
    #[serde(rename = "PR")]
    pub pr: i64,
    /// Points + assists.
    #[serde(rename = "PA")]
    pub pa: i64,
    /// Rebounds + assists.
    #[serde(rename = "RA")]
    pub ra: i64,
    #[serde(rename = "FGM")]
    pub fgm: i64,
    #[serde(rename = "FGA")]
    pub fga: i64,
    #[serde(rename = "FG_PCT")]
    pub fg_pct: f64,
    #[serde(rename = "FG3M")]
    pub fg3m: i64,
    #[serde(rename = "FG3A")]
    pub fg3a: i64,
    #[serde(rename = "FG3_PCT")]
    pub fg3_pct: f64,
    #[serde(rename = "FTM")]
    pub ftm: i64,
    #[serde(rename = "FTA")]
    pub fta: i64,
    #[serde(rename = "FT_PCT")]
    pub ft_pct: f64,
    #[serde(rename = "OREB")]
    pub oreb: i64,
    #[serde(rename = "DREB")]
    pub dreb: i64,
    #[serde(rename = "STL")]
    pub stl: i64,
    #[serde(rename = "BLK")]
    pub blk: i64,
    #[serde(rename = "TOV")]
    pub tov: i64,
}

/// Clean a raw game log: attach the player name, derive the combo columns
/// and project down to [`OUTPUT_COLUMNS`]. Pure; keeps row order; never
/// filters rows. Empty in, empty out.
pub fn clean_player_logs(player_name: &str, rows: &[GameLogRow]) -> Vec<PlayerLogRecord> {
    rows.iter()
        .map(|row| PlayerLogRecord {
            player_name: player_name.to_string(),
            game_date: row.game_date.clone(),
            matchup: row.matchup.clone(),
            wl: row.wl.clone(),
            min: row.min,
            pts: row.pts,
            reb: row.reb,
            ast: row.ast,
            pra: row.pts + row.reb + row.ast,
            pr: row.pts + row.reb,
            pa: row.pts + row.ast,
            ra: row.reb + row.ast,
            fgm: row.fgm,
            fga: row.fga,
            fg_pct: row.fg_pct,
            fg3m: row.fg3m,
            fg3a: row.fg3a,
            fg3_pct: row.fg3_pct,
            ftm: row.ftm,
            fta: row.fta,
            ft_pct: row.ft_pct,
            oreb: row.oreb,
            dreb: row.dreb,
            stl: row.stl,
            blk: row.blk,
            tov: row.tov,
        })
        .collect()
}
