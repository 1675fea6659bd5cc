use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::AllTimeRecord;

#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub records: Vec<AllTimeRecord>,
}

pub async fn all_time_records(
    State(state): State<AppState>,
) -> Result<Json<RecordsResponse>, ApiError> {
    Ok(Json(RecordsResponse {
        records: state.dataset.all_time_records.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::test_support::{get_json, state_with};
    use crate::storage::LeagueDataset;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_all_time_records() {
        let app = build_router(state_with(LeagueDataset::builtin()));
        let (status, json) = get_json(app, "/api/records").await;

        assert_eq!(status, StatusCode::OK);
        let records = json["records"].as_array().unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0]["category"], "Highest Single Game Score");
        assert_eq!(records[0]["top5"][0]["holder"], "Lanny");
        assert_eq!(records[0]["top5"][0]["record"], "212.00 points");
    }
}
