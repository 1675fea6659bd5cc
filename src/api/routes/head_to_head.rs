use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{aggregate_head_to_head, manager_head_to_head as find_manager};
use crate::models::ManagerHeadToHead;

#[derive(Debug, Serialize)]
pub struct HeadToHeadResponse {
    /// False when no matchup data is loaded
    pub has_data: bool,
    pub managers: Vec<ManagerHeadToHead>,
    pub computed_at: DateTime<Utc>,
}

pub async fn list_head_to_head(
    State(state): State<AppState>,
) -> Result<Json<HeadToHeadResponse>, ApiError> {
    let managers = aggregate_head_to_head(&state.dataset.matchups);

    Ok(Json(HeadToHeadResponse {
        has_data: !managers.is_empty(),
        managers,
        computed_at: Utc::now(),
    }))
}

#[derive(Debug, Serialize)]
pub struct ManagerHeadToHeadResponse {
    pub record: String,
    #[serde(flatten)]
    pub summary: ManagerHeadToHead,
}

pub async fn manager_head_to_head(
    State(state): State<AppState>,
    Path(manager): Path<String>,
) -> Result<Json<ManagerHeadToHeadResponse>, ApiError> {
    let summary = find_manager(&state.dataset.matchups, &manager)
        .ok_or_else(|| ApiError::NotFound(format!("Manager {}", manager)))?;

    Ok(Json(ManagerHeadToHeadResponse {
        record: summary.record(),
        summary,
    }))
}
