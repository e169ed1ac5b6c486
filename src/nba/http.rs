//! HTTP plumbing for the stats.nba.com API.

use std::time::Duration;

use rand::Rng;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT};
use reqwest::Client;

use crate::cli::types::{PlayerId, Season, SeasonType, TeamId};
use crate::error::Result;
use crate::nba::types::StatsResponse;

/// Base path for the NBA stats API.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// Browser-like header set; the provider rejects bare clients.
pub fn stats_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/124.0 Safari/537.36",
        ),
    );
    h.insert(REFERER, HeaderValue::from_static("https://stats.nba.com/"));
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    h.insert("x-nba-stats-token", HeaderValue::from_static("true"));
    h
}

/// Client with the default header set and a request timeout.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .default_headers(stats_headers())
        .timeout(Duration::from_secs(30))
        .build()?;
    Ok(client)
}

pub async fn get_team_roster(
    client: &Client,
    team_id: TeamId,
    season: &Season,
) -> Result<StatsResponse> {
    let url = format!("{STATS_BASE_URL}/commonteamroster");
    let params = [
        ("TeamID", team_id.to_string()),
        ("Season", season.as_str().to_string()),
        ("LeagueID", "00".to_string()),
    ];

    let res = client
        .get(&url)
        .query(&params)
        .send()
        .await?
        .error_for_status()?
        .json::<StatsResponse>()
        .await?;

    Ok(res)
}

pub async fn get_player_game_log(
    client: &Client,
    player_id: PlayerId,
    season: &Season,
    season_type: SeasonType,
) -> Result<StatsResponse> {
    let url = format!("{STATS_BASE_URL}/playergamelog");
    let params = [
        ("PlayerID", player_id.to_string()),
        ("Season", season.as_str().to_string()),
        ("SeasonType", season_type.as_api_param().to_string()),
        ("LeagueID", "00".to_string()),
    ];

    let res = client
        .get(&url)
        .query(&params)
        .send()
        .await?
        .error_for_status()?
        .json::<StatsResponse>()
        .await?;

    Ok(res)
}

/// Sleep for a uniformly random duration in `[min_secs, max_secs)`.
///
/// Self-throttle against the provider's undocumented rate limits: call
/// after every request when more requests will follow.
pub async fn throttle(min_secs: f64, max_secs: f64) {
    let secs = if max_secs > min_secs {
        rand::rng().random_range(min_secs..max_secs)
    } else {
        min_secs
    };
    tokio::time::sleep(Duration::from_secs_f64(secs.max(0.0))).await;
}
