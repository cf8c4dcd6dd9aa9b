use crate::errors::{Error, Result};
use crate::portfolio::positions::{EnrichedPosition, Position};
use crate::portfolio::valuation::{MissingQuotePolicy, PortfolioSummary, PortfolioValuation};
use crate::quotes::{Quote, QuoteSnapshot};
use crate::users::User;

use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Values a single position against its quote.
///
/// Requires `position.symbol == quote.symbol`, `quantity >= 0` and
/// `average_cost > 0`; anything else is rejected as invalid input, as is a
/// figure outside the decimal range. The returned `weight` is zero until
/// [`assign_weights`] runs.
pub fn enrich(position: &Position, quote: &Quote) -> Result<EnrichedPosition> {
    if position.symbol != quote.symbol {
        return Err(Error::invalid_input(format!(
            "position {} is for symbol '{}' but quote is for '{}'",
            position.id, position.symbol, quote.symbol
        )));
    }
    if position.average_cost <= Decimal::ZERO {
        return Err(Error::invalid_input(format!(
            "position {} has non-positive average cost {}",
            position.id, position.average_cost
        )));
    }
    if position.quantity < Decimal::ZERO {
        return Err(Error::invalid_input(format!(
            "position {} has negative quantity {}",
            position.id, position.quantity
        )));
    }

    let overflow = |figure: &str| out_of_range(figure, &position.id);
    let price_delta = quote
        .price
        .checked_sub(position.average_cost)
        .ok_or_else(|| overflow("price delta"))?;
    let unrealized_pnl = price_delta
        .checked_mul(position.quantity)
        .ok_or_else(|| overflow("unrealized P&L"))?;
    let unrealized_pnl_percent = price_delta
        .checked_div(position.average_cost)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .ok_or_else(|| overflow("unrealized P&L percent"))?;
    let market_value = quote
        .price
        .checked_mul(position.quantity)
        .ok_or_else(|| overflow("market value"))?;
    let day_change = quote
        .change
        .checked_mul(position.quantity)
        .ok_or_else(|| overflow("day change"))?;

    Ok(EnrichedPosition {
        position: position.clone(),
        current_price: quote.price,
        unrealized_pnl,
        unrealized_pnl_percent,
        market_value,
        day_change,
        weight: Decimal::ZERO,
    })
}

fn out_of_range(figure: &str, owner: &str) -> Error {
    Error::invalid_input(format!("{} of {} is outside the decimal range", figure, owner))
}

/// Sums `values`, failing instead of overflowing.
fn checked_sum(values: impl IntoIterator<Item = Decimal>, figure: &str) -> Result<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |total, value| total.checked_add(value))
        .ok_or_else(|| out_of_range(figure, "portfolio"))
}

/// `numerator / denominator * 100`, failing instead of overflowing.
fn checked_percent(numerator: Decimal, denominator: Decimal, figure: &str) -> Result<Decimal> {
    numerator
        .checked_div(denominator)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .ok_or_else(|| out_of_range(figure, "portfolio"))
}

/// Enriches every position from the snapshot, applying `policy` to positions
/// without a quote.
///
/// Returns the enriched positions in input order together with the symbols
/// that were excluded.
pub fn enrich_positions(
    positions: &[Position],
    snapshot: &QuoteSnapshot,
    policy: MissingQuotePolicy,
) -> Result<(Vec<EnrichedPosition>, Vec<String>)> {
    let mut enriched = Vec::with_capacity(positions.len());
    let mut excluded_symbols = Vec::new();

    for position in positions {
        match snapshot.get(&position.symbol) {
            Some(quote) => enriched.push(enrich(position, quote)?),
            None => match policy {
                MissingQuotePolicy::Reject => {
                    return Err(Error::missing_quote(position.symbol.clone()));
                }
                MissingQuotePolicy::Exclude => {
                    warn!(
                        "Missing quote for symbol {}. Position {} excluded from totals.",
                        position.symbol, position.id
                    );
                    if !excluded_symbols.contains(&position.symbol) {
                        excluded_symbols.push(position.symbol.clone());
                    }
                }
            },
        }
    }

    Ok((enriched, excluded_symbols))
}

/// Aggregates enriched positions into a portfolio summary.
///
/// `previous_equity` is the equity at the previous close and must be positive.
pub fn summarize(
    positions: &[EnrichedPosition],
    previous_equity: Decimal,
) -> Result<PortfolioSummary> {
    if previous_equity <= Decimal::ZERO {
        return Err(Error::invalid_input(format!(
            "previous equity must be positive, got {}",
            previous_equity
        )));
    }

    let total_equity = checked_sum(positions.iter().map(|p| p.market_value), "total equity")?;
    let cost_bases = positions
        .iter()
        .map(|p| p.cost_basis().ok_or_else(|| out_of_range("cost basis", &p.position.id)))
        .collect::<Result<Vec<_>>>()?;
    let total_cost_basis = checked_sum(cost_bases, "total cost basis")?;
    let total_unrealized_pnl = checked_sum(
        positions.iter().map(|p| p.unrealized_pnl),
        "total unrealized P&L",
    )?;

    let day_change = total_equity
        .checked_sub(previous_equity)
        .ok_or_else(|| out_of_range("day change", "portfolio"))?;
    let day_change_percent = checked_percent(day_change, previous_equity, "day change percent")?;

    let roi = if total_cost_basis.is_zero() {
        None
    } else {
        let gain = total_equity
            .checked_sub(total_cost_basis)
            .ok_or_else(|| out_of_range("ROI", "portfolio"))?;
        Some(checked_percent(gain, total_cost_basis, "ROI")?)
    };

    Ok(PortfolioSummary {
        total_equity,
        day_change,
        day_change_percent,
        roi,
        total_cost_basis,
        total_unrealized_pnl,
    })
}

/// Equity at the previous close implied by the quotes' absolute change:
/// `Σ (price - change) * quantity`.
pub fn implied_previous_equity(positions: &[EnrichedPosition]) -> Result<Decimal> {
    let closes = positions
        .iter()
        .map(|p| {
            p.market_value
                .checked_sub(p.day_change)
                .ok_or_else(|| out_of_range("previous close value", &p.position.id))
        })
        .collect::<Result<Vec<_>>>()?;
    checked_sum(closes, "previous equity")
}

/// Sets each position's weight as a percentage of `total_equity`.
pub fn assign_weights(positions: &mut [EnrichedPosition], total_equity: Decimal) -> Result<()> {
    for position in positions.iter_mut() {
        position.weight = if total_equity.is_zero() {
            Decimal::ZERO
        } else {
            checked_percent(position.market_value, total_equity, "weight")?
        };
    }
    Ok(())
}

/// Values all of a user's positions against one snapshot.
///
/// The baseline is the user's tracked previous equity when present, otherwise
/// the one implied by the quotes. A user holding no shares in any valued
/// position gets an empty summary rather than a zero-baseline error.
pub fn value_portfolio(
    user: &User,
    snapshot: &QuoteSnapshot,
    policy: MissingQuotePolicy,
) -> Result<PortfolioValuation> {
    let (mut positions, excluded_symbols) = enrich_positions(&user.positions, snapshot, policy)?;

    let summary = if positions.iter().all(|p| p.position.quantity.is_zero()) {
        debug!("User {} holds no shares in valued positions", user.id);
        PortfolioSummary::empty()
    } else {
        let previous_equity = match user.previous_equity {
            Some(tracked) => tracked,
            None => implied_previous_equity(&positions)?,
        };
        if previous_equity <= Decimal::ZERO {
            return Err(Error::invalid_input(format!(
                "previous equity of user {} is {}; quotes must imply a positive previous close",
                user.id, previous_equity
            )));
        }
        summarize(&positions, previous_equity)?
    };

    assign_weights(&mut positions, summary.total_equity)?;

    Ok(PortfolioValuation {
        positions,
        excluded_symbols,
        summary,
    })
}
