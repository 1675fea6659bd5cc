use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::all_champions;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub league_name: String,
    pub established: i32,
    pub seasons: usize,
    pub managers: Vec<String>,
    pub champions: Vec<String>,
    pub has_head_to_head: bool,
    pub has_power_rankings: bool,
}

pub async fn overview(
    State(state): State<AppState>,
) -> Result<Json<OverviewResponse>, ApiError> {
    let dataset = &state.dataset;

    Ok(Json(OverviewResponse {
        league_name: state.league.name.clone(),
        established: state.league.established,
        seasons: dataset.championships.len(),
        managers: dataset.managers(),
        champions: all_champions(&dataset.championships),
        has_head_to_head: !dataset.matchups.is_empty(),
        has_power_rankings: !dataset.games.is_empty(),
    }))
}
