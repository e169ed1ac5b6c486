//! Command implementations for the NBA game-log export CLI

pub mod player_logs;
pub mod roster;
pub mod team_list;
