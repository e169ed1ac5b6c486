//! Unit tests for the stats API wire types

use super::*;
use serde_json::json;

fn roster_response() -> StatsResponse {
    serde_json::from_value(json!({
        "resource": "commonteamroster",
        "resultSets": [
            {
                "name": "CommonTeamRoster",
                "headers": ["TeamID", "SEASON", "LeagueID", "PLAYER", "NICKNAME", "PLAYER_ID"],
                "rowSet": [
                    [1610612754, "2024-25", "00", "Tyrese Haliburton", "Tyrese", 1630169],
                    [1610612754, "2024-25", "00", "Pascal Siakam", "Pascal", 1627783]
                ]
            },
            {
                "name": "Coaches",
                "headers": ["TEAM_ID", "COACH_NAME"],
                "rowSet": [[1610612754, "Rick Carlisle"]]
            }
        ]
    }))
    .unwrap()
}

#[test]
fn test_result_set_lookup_by_name() {
    let response = roster_response();
    assert!(response.result_set("CommonTeamRoster").is_ok());
    assert!(response.result_set("Coaches").is_ok());

    let err = response.result_set("PlayerGameLog").unwrap_err();
    match err {
        NbaError::MissingResultSet { name } => assert_eq!(name, "PlayerGameLog"),
        other => panic!("expected MissingResultSet, got {other:?}"),
    }
}

#[test]
fn test_column_lookup() {
    let response = roster_response();
    let rs = response.result_set("CommonTeamRoster").unwrap();
    assert_eq!(rs.column("PLAYER").unwrap(), 3);
    assert_eq!(rs.column("PLAYER_ID").unwrap(), 5);

    let err = rs.column("BIRTH_DATE").unwrap_err();
    match err {
        NbaError::MissingColumn { result_set, column } => {
            assert_eq!(result_set, "CommonTeamRoster");
            assert_eq!(column, "BIRTH_DATE");
        }
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn test_roster_parsing_preserves_order() {
    let entries = RosterEntry::from_response(&roster_response()).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].player_name, "Tyrese Haliburton");
    assert_eq!(entries[0].player_id, PlayerId::new(1630169));
    assert_eq!(entries[1].player_name, "Pascal Siakam");
}

#[test]
fn test_roster_rejects_unusable_identity_cells() {
    let response: StatsResponse = serde_json::from_value(json!({
        "resultSets": [{
            "name": "CommonTeamRoster",
            "headers": ["PLAYER", "PLAYER_ID"],
            "rowSet": [["Tyrese Haliburton", null]]
        }]
    }))
    .unwrap();

    let err = RosterEntry::from_response(&response).unwrap_err();
    match err {
        NbaError::InvalidCell { column, .. } => assert_eq!(column, "PLAYER_ID"),
        other => panic!("expected InvalidCell, got {other:?}"),
    }
}

fn game_log_response(rows: serde_json::Value) -> StatsResponse {
    serde_json::from_value(json!({
        "resource": "playergamelog",
        "resultSets": [{
            "name": "PlayerGameLog",
            "headers": [
                "SEASON_ID", "Player_ID", "Game_ID", "GAME_DATE", "MATCHUP", "WL",
                "MIN", "FGM", "FGA", "FG_PCT", "FG3M", "FG3A", "FG3_PCT",
                "FTM", "FTA", "FT_PCT", "OREB", "DREB", "REB", "AST", "STL",
                "BLK", "TOV", "PF", "PTS", "PLUS_MINUS", "VIDEO_AVAILABLE"
            ],
            "rowSet": rows
        }]
    }))
    .unwrap()
}

#[test]
fn test_game_log_parsing_by_header_position() {
    let response = game_log_response(json!([[
        "22024", 1630169, "0042400101", "MAY 21, 2025", "IND @ NYK", "W",
        35, 8, 17, 0.471, 4, 8, 0.5, 11, 12, 0.917, 1, 5, 6, 10, 2, 0, 3, 2, 31, 12, 1
    ]]));

    let rows = GameLogRow::from_response(&response).unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.game_date, "MAY 21, 2025");
    assert_eq!(row.matchup, "IND @ NYK");
    assert_eq!(row.wl, "W");
    assert_eq!(row.min, 35);
    assert_eq!(row.pts, 31);
    assert_eq!(row.reb, 6);
    assert_eq!(row.ast, 10);
    assert_eq!(row.fgm, 8);
    assert_eq!(row.fga, 17);
    assert_eq!(row.fg_pct, 0.471);
    assert_eq!(row.fg3m, 4);
    assert_eq!(row.fg3_pct, 0.5);
    assert_eq!(row.ftm, 11);
    assert_eq!(row.ft_pct, 0.917);
    assert_eq!(row.oreb, 1);
    assert_eq!(row.dreb, 5);
    assert_eq!(row.stl, 2);
    assert_eq!(row.blk, 0);
    assert_eq!(row.tov, 3);
}

#[test]
fn test_game_log_empty_row_set_is_not_an_error() {
    let response = game_log_response(json!([]));
    let rows = GameLogRow::from_response(&response).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_game_log_tolerates_null_stat_cells() {
    let response = game_log_response(json!([[
        "22024", 1630169, "0042400102", "MAY 23, 2025", "IND @ NYK", null,
        null, null, null, null, null, null, null, null, null, null,
        null, null, null, null, null, null, null, null, null, null, null
    ]]));

    let rows = GameLogRow::from_response(&response).unwrap();
    assert_eq!(rows[0].wl, "");
    assert_eq!(rows[0].pts, 0);
    assert_eq!(rows[0].fg_pct, 0.0);
}

#[test]
fn test_game_log_column_order_does_not_matter() {
    let response: StatsResponse = serde_json::from_value(json!({
        "resultSets": [{
            "name": "PlayerGameLog",
            "headers": [
                "PTS", "GAME_DATE", "MATCHUP", "WL", "MIN", "REB", "AST",
                "FGM", "FGA", "FG_PCT", "FG3M", "FG3A", "FG3_PCT",
                "FTM", "FTA", "FT_PCT", "OREB", "DREB", "STL", "BLK", "TOV"
            ],
            "rowSet": [[
                20, "MAY 25, 2025", "IND vs. NYK", "L", 33, 4, 7,
                7, 15, 0.467, 2, 6, 0.333, 4, 4, 1.0, 0, 4, 1, 1, 2
            ]]
        }]
    }))
    .unwrap();

    let rows = GameLogRow::from_response(&response).unwrap();
    assert_eq!(rows[0].pts, 20);
    assert_eq!(rows[0].game_date, "MAY 25, 2025");
    assert_eq!(rows[0].reb, 4);
}

#[test]
fn test_game_log_missing_required_column_is_an_error() {
    let response: StatsResponse = serde_json::from_value(json!({
        "resultSets": [{
            "name": "PlayerGameLog",
            "headers": ["GAME_DATE", "MATCHUP"],
            "rowSet": []
        }]
    }))
    .unwrap();

    assert!(matches!(
        GameLogRow::from_response(&response),
        Err(NbaError::MissingColumn { .. })
    ));
}

#[test]
fn test_envelope_without_result_sets_deserializes() {
    let response: StatsResponse = serde_json::from_value(json!({})).unwrap();
    assert!(response.result_sets.is_empty());
}
