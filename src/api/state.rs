use std::sync::Arc;

use crate::config::LeagueConfig;
use crate::storage::LeagueDataset;

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<LeagueDataset>,
    pub league: Arc<LeagueConfig>,
}
