use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use stockshare_core::leaderboard::{RankMetric, RankedEntry};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LeaderboardQuery {
    viewer_id: Option<String>,
    metric: Option<String>,
}

impl LeaderboardQuery {
    fn viewer_id(&self, state: &AppState) -> String {
        self.viewer_id
            .clone()
            .unwrap_or_else(|| state.default_viewer_id.clone())
    }

    fn metric(&self) -> ApiResult<Option<RankMetric>> {
        Ok(self
            .metric
            .as_deref()
            .map(RankMetric::from_str)
            .transpose()?)
    }
}

async fn get_leaderboard(
    Query(query): Query<LeaderboardQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<RankedEntry>>> {
    let entries = state
        .portfolio_service
        .get_leaderboard(&query.viewer_id(&state), query.metric()?)?;
    Ok(Json(entries))
}

async fn get_podium(
    Query(query): Query<LeaderboardQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<RankedEntry>>> {
    let entries = state
        .portfolio_service
        .get_podium(&query.viewer_id(&state), query.metric()?)?;
    Ok(Json(entries))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/leaderboard", get(get_leaderboard))
        .route("/leaderboard/podium", get(get_podium))
}
