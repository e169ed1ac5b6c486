//! Load stage: write a cleaned log table as one CSV file per player.

use std::path::{Path, PathBuf};

use csv::Writer;

use crate::core::paths::player_csv_path;
use crate::error::Result;
use crate::pipeline::transform::PlayerLogRecord;

/// Write `records` to `<team_dir>/<sanitized player name>.csv`.
///
/// Returns the path written, or `None` when there is nothing to write - a
/// player with no games gets no file, not an empty one. The caller is
/// responsible for having created `team_dir`. Reruns overwrite in place.
pub fn write_player_csv(
    player_name: &str,
    team_dir: &Path,
    records: &[PlayerLogRecord],
) -> Result<Option<PathBuf>> {
    if records.is_empty() {
        return Ok(None);
    }

    let path = player_csv_path(team_dir, player_name);
    let mut writer = Writer::from_path(&path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nba::types::GameLogRow;
    use crate::pipeline::transform::{clean_player_logs, OUTPUT_COLUMNS};
    use std::fs;
    use tempfile::tempdir;

    fn sample_records() -> Vec<PlayerLogRecord> {
        let row = GameLogRow {
            game_date: "MAY 21, 2025".to_string(),
            matchup: "IND @ NYK".to_string(),
            wl: "W".to_string(),
            min: 35,
            pts: 31,
            reb: 6,
            ast: 10,
            fgm: 8,
            fga: 17,
            fg_pct: 0.471,
            fg3m: 4,
            fg3a: 8,
            fg3_pct: 0.5,
            ftm: 11,
            fta: 12,
            ft_pct: 0.917,
            oreb: 1,
            dreb: 5,
            stl: 2,
            blk: 0,
            tov: 3,
        };
        clean_player_logs("Tyrese Haliburton", &[row])
    }

    #[test]
    fn test_empty_table_writes_nothing() {
        let dir = tempdir().unwrap();

        let result = write_player_csv("Tyrese Haliburton", dir.path(), &[]).unwrap();

        assert!(result.is_none());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_writes_header_and_rows() {
        let dir = tempdir().unwrap();

        let path = write_player_csv("Tyrese Haliburton", dir.path(), &sample_records())
            .unwrap()
            .unwrap();

        assert_eq!(path, dir.path().join("Tyrese_Haliburton.csv"));
        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), OUTPUT_COLUMNS.join(","));
        // The date cell contains a comma, so the writer quotes it.
        assert_eq!(
            lines.next().unwrap(),
            "Tyrese Haliburton,\"MAY 21, 2025\",IND @ NYK,W,35,31,6,10,\
             47,37,41,16,8,17,0.471,4,8,0.5,11,12,0.917,1,5,2,0,3"
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_filename_is_sanitized() {
        let dir = tempdir().unwrap();

        let path = write_player_csv("T.J. McConnell", dir.path(), &sample_records())
            .unwrap()
            .unwrap();

        assert_eq!(path, dir.path().join("TJ_McConnell.csv"));
    }

    #[test]
    fn test_rewriting_is_byte_identical() {
        let dir = tempdir().unwrap();
        let records = sample_records();

        let path = write_player_csv("Tyrese Haliburton", dir.path(), &records)
            .unwrap()
            .unwrap();
        let first = fs::read(&path).unwrap();

        let path = write_player_csv("Tyrese Haliburton", dir.path(), &records)
            .unwrap()
            .unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_parent_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does_not_exist");

        let result = write_player_csv("Tyrese Haliburton", &missing, &sample_records());
        assert!(result.is_err());
    }
}
