//! Filesystem-safe names and the output directory layout.
//!
//! Layout: `<out-dir>/<Sanitized_Team>/<Sanitized_Player>.csv`.

use std::path::{Path, PathBuf};

/// Normalize a display name into a filesystem-safe token: spaces become
/// underscores; hyphens, periods and apostrophes are deleted; everything
/// else is preserved in order.
///
/// Distinct names can collide ("O'Neal" and "ONeal" map to the same
/// token); the last write wins.
pub fn safe_filename(name: &str) -> String {
    name.chars()
        .filter_map(|c| match c {
            ' ' => Some('_'),
            '-' | '.' | '\'' => None,
            other => Some(other),
        })
        .collect()
}

/// Directory holding one team's player files.
pub fn team_dir(out_dir: &Path, team_name: &str) -> PathBuf {
    out_dir.join(safe_filename(team_name))
}

/// Output file for one player within a team directory.
pub fn player_csv_path(team_dir: &Path, player_name: &str) -> PathBuf {
    team_dir.join(format!("{}.csv", safe_filename(player_name)))
}
