use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{available_seasons, chart_series, season_power_rankings};
use crate::models::{ChartPoint, SeasonPowerRankings};

#[derive(Debug, Serialize)]
pub struct SeasonsResponse {
    pub has_data: bool,
    /// Newest first
    pub seasons: Vec<i32>,
}

pub async fn list_seasons(
    State(state): State<AppState>,
) -> Result<Json<SeasonsResponse>, ApiError> {
    let seasons = available_seasons(&state.dataset.games);

    Ok(Json(SeasonsResponse {
        has_data: !seasons.is_empty(),
        seasons,
    }))
}

#[derive(Debug, Serialize)]
pub struct SeasonRankingsResponse {
    #[serde(flatten)]
    pub rankings: SeasonPowerRankings,
    pub chart: Vec<ChartPoint>,
}

pub async fn season_rankings(
    State(state): State<AppState>,
    season: Result<Path<i32>, PathRejection>,
) -> Result<Json<SeasonRankingsResponse>, ApiError> {
    let Path(season) = season.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    if !state.dataset.games.iter().any(|g| g.season == season) {
        return Err(ApiError::NotFound(format!("Season {}", season)));
    }

    let rankings = season_power_rankings(&state.dataset.games, season);
    let chart = chart_series(&rankings);

    Ok(Json(SeasonRankingsResponse { rankings, chart }))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::test_support::{get_json, state_with};
    use crate::models::GameResult;
    use crate::storage::LeagueDataset;
    use axum::http::StatusCode;
    use serde_json::json;

    fn app() -> axum::Router {
        let dataset = LeagueDataset {
            games: vec![
                GameResult::new(2023, 1, "A", "B", 101.5, 99.0),
                GameResult::new(2024, 1, "A", "B", 120.0, 100.0),
                GameResult::new(2024, 1, "C", "D", 90.0, 80.0),
                GameResult::new(2024, 2, "A", "C", 110.0, 130.0),
                GameResult::new(2024, 2, "B", "D", 95.0, 95.0),
            ],
            ..Default::default()
        };
        build_router(state_with(dataset))
    }

    #[tokio::test]
    async fn test_list_seasons() {
        let (status, json) = get_json(app(), "/api/power-rankings").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"has_data": true, "seasons": [2024, 2023]}));
    }

    #[tokio::test]
    async fn test_list_seasons_no_data() {
        let app = build_router(state_with(LeagueDataset::builtin()));
        let (_, json) = get_json(app, "/api/power-rankings").await;

        assert_eq!(json["has_data"], false);
        assert_eq!(json["seasons"], json!([]));
    }

    #[tokio::test]
    async fn test_season_rankings() {
        let (status, json) = get_json(app(), "/api/power-rankings/2024").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["season"], 2024);
        assert_eq!(json["final_week"], 2);
        assert_eq!(json["weeks"].as_array().unwrap().len(), 2);
        assert_eq!(json["final_rankings"].as_array().unwrap().len(), 4);

        let chart = json["chart"].as_array().unwrap();
        assert_eq!(chart.len(), 2);
        assert_eq!(chart[0]["week"], 1);
        assert_eq!(chart[0]["A"], 11.5);
    }

    #[tokio::test]
    async fn test_unknown_season() {
        let (status, _) = get_json(app(), "/api/power-rankings/1999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_non_numeric_season() {
        let (status, json) = get_json(app(), "/api/power-rankings/latest").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }
}
