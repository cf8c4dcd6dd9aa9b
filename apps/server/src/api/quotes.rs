use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use stockshare_core::quotes::Quote;
use stockshare_core::Error as CoreError;

use crate::{error::ApiResult, main_lib::AppState};

async fn get_quotes(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Quote>>> {
    let quotes = state.portfolio_service.get_quotes()?;
    Ok(Json(quotes))
}

async fn get_quote(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Quote>> {
    let quote = state
        .portfolio_service
        .get_quotes()?
        .into_iter()
        .find(|quote| quote.symbol == symbol)
        .ok_or_else(|| CoreError::NotFound(format!("quote for '{}'", symbol)))?;
    Ok(Json(quote))
}

/// Replaces the whole quote snapshot. Later requests value against the new one.
/// A quote the engine cannot value rejects the whole request and keeps the
/// current snapshot.
async fn replace_quotes(
    State(state): State<Arc<AppState>>,
    Json(quotes): Json<Vec<Quote>>,
) -> ApiResult<StatusCode> {
    let count = quotes.len();
    state.quote_provider.replace(quotes)?;
    tracing::info!("Replaced quote snapshot with {} quotes", count);
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/quotes", get(get_quotes).put(replace_quotes))
        .route("/quotes/{symbol}", get(get_quote))
}
