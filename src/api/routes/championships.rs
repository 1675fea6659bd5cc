use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{
    back_to_back_champions, championship_leaderboard, championships_by_year, championships_for,
    rank_labels,
};
use crate::models::{ChampionshipRecord, StreakEntry};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Deserialize)]
pub struct ChampionshipsParams {
    #[serde(default)]
    pub order: SortOrder,
}

#[derive(Debug, Serialize)]
pub struct ChampionshipsResponse {
    pub championships: Vec<ChampionshipRecord>,
    pub total: usize,
}

pub async fn list_championships(
    State(state): State<AppState>,
    params: Result<Query<ChampionshipsParams>, QueryRejection>,
) -> Result<Json<ChampionshipsResponse>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let reverse = matches!(params.order, SortOrder::Desc);
    let championships = championships_by_year(&state.dataset.championships, reverse);

    Ok(Json(ChampionshipsResponse {
        total: championships.len(),
        championships,
    }))
}

#[derive(Debug, Serialize)]
pub struct RankedEntry {
    /// `None` when sharing the count of the entry above
    pub rank: Option<u32>,
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<RankedEntry>,
}

pub async fn leaderboard(
    State(state): State<AppState>,
) -> Result<Json<LeaderboardResponse>, ApiError> {
    let board = championship_leaderboard(&state.dataset.championships);
    let ranks = rank_labels(&board);

    let leaderboard = board
        .into_iter()
        .zip(ranks)
        .map(|(entry, rank)| RankedEntry {
            rank,
            name: entry.name,
            count: entry.count,
        })
        .collect();

    Ok(Json(LeaderboardResponse { leaderboard }))
}

#[derive(Debug, Serialize)]
pub struct StreakView {
    #[serde(flatten)]
    pub streak: StreakEntry,
    /// Three or more titles in a row
    pub three_peat: bool,
}

#[derive(Debug, Serialize)]
pub struct StreaksResponse {
    pub streaks: Vec<StreakView>,
    pub longest: Option<u32>,
}

pub async fn streaks(State(state): State<AppState>) -> Result<Json<StreaksResponse>, ApiError> {
    let streaks: Vec<StreakView> = back_to_back_champions(&state.dataset.championships)
        .into_iter()
        .map(|streak| StreakView {
            three_peat: streak.is_three_peat_or_better(),
            streak,
        })
        .collect();
    let longest = streaks.first().map(|s| s.streak.count);

    Ok(Json(StreaksResponse { streaks, longest }))
}

#[derive(Debug, Serialize)]
pub struct ManagerChampionshipsResponse {
    pub manager: String,
    pub count: usize,
    pub years: Vec<i32>,
}

pub async fn manager_championships(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ManagerChampionshipsResponse>, ApiError> {
    let seasons = championships_for(&state.dataset.championships, &name);
    if seasons.is_empty() {
        return Err(ApiError::NotFound(format!("No championships for {}", name)));
    }

    Ok(Json(ManagerChampionshipsResponse {
        manager: name,
        count: seasons.len(),
        years: seasons.iter().map(|r| r.year).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::test_support::{get_json, state_with};
    use crate::storage::LeagueDataset;
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    fn app() -> axum::Router {
        build_router(state_with(LeagueDataset::builtin()))
    }

    #[tokio::test]
    async fn test_championships_default_newest_first() {
        let (status, json) = get_json(app(), "/api/championships").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"], 27);
        assert_eq!(json["championships"][0]["year"], 2025);
        assert_eq!(json["championships"][0]["champion"], "Jason");
    }

    #[tokio::test]
    async fn test_championships_ascending() {
        let (status, json) = get_json(app(), "/api/championships?order=asc").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["championships"][0]["year"], 1999);
        assert_eq!(json["championships"][0]["runner_up"], Value::Null);
    }

    #[tokio::test]
    async fn test_championships_bad_order() {
        let (status, json) = get_json(app(), "/api/championships?order=sideways").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
        assert!(json["error"]["message"].as_str().unwrap().contains("sideways"));
    }

    #[tokio::test]
    async fn test_leaderboard_rank_labels() {
        let (status, json) = get_json(app(), "/api/championships/leaderboard").await;
        assert_eq!(status, StatusCode::OK);

        let board = json["leaderboard"].as_array().unwrap();
        assert_eq!(board[0], json!({"rank": 1, "name": "Ted", "count": 5}));
        assert_eq!(board[1], json!({"rank": 2, "name": "Joey", "count": 4}));
        assert_eq!(board[2], json!({"rank": null, "name": "Tyler", "count": 4}));
        assert_eq!(board[3], json!({"rank": 4, "name": "Peter", "count": 3}));

        let total: u64 = board.iter().map(|e| e["count"].as_u64().unwrap()).sum();
        assert_eq!(total, 27);
    }

    #[tokio::test]
    async fn test_streaks() {
        let (status, json) = get_json(app(), "/api/championships/streaks").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["longest"], 3);
        assert_eq!(
            json["streaks"],
            json!([
                {
                    "manager": "Ted",
                    "start_year": 1999,
                    "end_year": 2001,
                    "count": 3,
                    "three_peat": true
                },
                {
                    "manager": "Ty",
                    "start_year": 2002,
                    "end_year": 2003,
                    "count": 2,
                    "three_peat": false
                },
                {
                    "manager": "Joey",
                    "start_year": 2010,
                    "end_year": 2011,
                    "count": 2,
                    "three_peat": false
                },
            ])
        );
    }

    #[tokio::test]
    async fn test_manager_championships() {
        let (status, json) = get_json(app(), "/api/championships/managers/Joey").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["count"], 4);
        assert_eq!(json["years"], json!([2006, 2010, 2011, 2019]));
    }

    #[tokio::test]
    async fn test_manager_without_titles() {
        let (status, json) = get_json(app(), "/api/championships/managers/Nobody").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }
}
