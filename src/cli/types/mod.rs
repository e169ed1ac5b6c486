//! Type-safe wrappers and enums for NBA stats API parameters.

pub mod ids;
pub mod season;

pub use ids::{PlayerId, TeamId};
pub use season::{Season, SeasonType};
