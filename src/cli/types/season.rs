//! Season label and season-type filter for NBA stats API queries.

use crate::error::{NbaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Season label in the provider's `YYYY-YY` form (e.g. "2024-25").
///
/// The suffix must be the two trailing digits of the following year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(String);

impl Season {
    pub fn new(label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        if Self::is_valid(&label) {
            Ok(Self(label))
        } else {
            Err(NbaError::InvalidSeason { value: label })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(label: &str) -> bool {
        let bytes = label.as_bytes();
        if bytes.len() != 7 || !label.is_ascii() || bytes[4] != b'-' {
            return false;
        }
        let (start, end) = (&label[..4], &label[5..]);
        if !start.bytes().all(|b| b.is_ascii_digit()) || !end.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        // "2024-25" means the 2024/2025 season: suffix is start year + 1.
        let start_year: u32 = match start.parse() {
            Ok(y) => y,
            Err(_) => return false,
        };
        let end_year: u32 = match end.parse() {
            Ok(y) => y,
            Err(_) => return false,
        };
        (start_year + 1) % 100 == end_year
    }
}

impl Default for Season {
    fn default() -> Self {
        Self("2024-25".to_string())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Provider-defined filter distinguishing regular-season, playoff,
/// pre-season and all-star games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonType {
    RegularSeason,
    #[default]
    Playoffs,
    PreSeason,
    AllStar,
}

impl SeasonType {
    /// The exact string the stats API expects in the `SeasonType` parameter.
    pub fn as_api_param(&self) -> &'static str {
        match self {
            SeasonType::RegularSeason => "Regular Season",
            SeasonType::Playoffs => "Playoffs",
            SeasonType::PreSeason => "Pre Season",
            SeasonType::AllStar => "All Star",
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            SeasonType::RegularSeason => "regular-season",
            SeasonType::Playoffs => "playoffs",
            SeasonType::PreSeason => "pre-season",
            SeasonType::AllStar => "all-star",
        };
        write!(f, "{}", token)
    }
}

impl FromStr for SeasonType {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "regular-season" | "regular" => Ok(SeasonType::RegularSeason),
            "playoffs" => Ok(SeasonType::Playoffs),
            "pre-season" | "preseason" => Ok(SeasonType::PreSeason),
            "all-star" | "allstar" => Ok(SeasonType::AllStar),
            _ => Err(NbaError::InvalidSeasonType {
                value: s.to_string(),
            }),
        }
    }
}
