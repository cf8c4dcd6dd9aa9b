use crate::portfolio::positions::EnrichedPosition;
use crate::portfolio::valuation::UserPortfolio;

use super::leaderboard_model::{PositionView, ProfileView};

/// Builds the view of one holding. Absolute figures survive only when `visible`.
pub fn position_view(position: &EnrichedPosition, visible: bool) -> PositionView {
    let shown = |value| if visible { Some(value) } else { None };

    PositionView {
        id: position.position.id.clone(),
        symbol: position.position.symbol.clone(),
        current_price: position.current_price,
        unrealized_pnl_percent: position.unrealized_pnl_percent,
        weight: position.weight,
        average_cost: shown(position.position.average_cost),
        quantity: shown(position.position.quantity),
        market_value: shown(position.market_value),
        unrealized_pnl: shown(position.unrealized_pnl),
        day_change: shown(position.day_change),
    }
}

/// Builds a profile as `viewer_id` sees it. Only the owner sees absolute figures.
pub fn profile_view(portfolio: &UserPortfolio, viewer_id: &str) -> ProfileView {
    let user = &portfolio.user;
    let valuation = &portfolio.valuation;
    let summary = &valuation.summary;
    let visible = user.id == viewer_id;
    let shown = |value| if visible { Some(value) } else { None };

    ProfileView {
        user_id: user.id.clone(),
        name: user.name.clone(),
        avatar_url: user.avatar_url.clone(),
        read_only: !visible,
        roi: user.roi,
        day_change_percent: summary.day_change_percent,
        holdings_roi: summary.roi,
        total_equity: shown(summary.total_equity),
        day_change: shown(summary.day_change),
        total_cost_basis: shown(summary.total_cost_basis),
        positions: valuation
            .positions
            .iter()
            .map(|position| position_view(position, visible))
            .collect(),
        excluded_symbols: valuation.excluded_symbols.clone(),
    }
}
