use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use stockshare_core::leaderboard::ProfileView;
use stockshare_core::quotes::WatchlistItem;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViewerQuery {
    viewer_id: Option<String>,
}

async fn get_profile(
    Path(user_id): Path<String>,
    Query(query): Query<ViewerQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ProfileView>> {
    let viewer_id = query
        .viewer_id
        .unwrap_or_else(|| state.default_viewer_id.clone());
    let view = state
        .portfolio_service
        .get_profile_view(&user_id, &viewer_id)?;
    Ok(Json(view))
}

async fn get_watchlist(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<WatchlistItem>>> {
    let items = state.portfolio_service.get_watchlist(&user_id)?;
    Ok(Json(items))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/{id}/profile", get(get_profile))
        .route("/users/{id}/watchlist", get(get_watchlist))
}
