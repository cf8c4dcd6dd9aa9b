use log::debug;
use rust_decimal::Decimal;

use super::leaderboard_model::{RankMetric, RankedEntry};
use super::visibility::profile_view;
use crate::errors::{Error, Result};
use crate::portfolio::valuation::UserPortfolio;

/// Orders portfolios by `metric`, highest first, as seen by `viewer_id`.
///
/// The sort is stable, so equal metric values keep their input order, and
/// ranks are sequential (1, 2, 3, ...) even across ties. Only the viewer's
/// own entry is visible. The viewer must be one of the ranked users.
pub fn rank<F>(
    portfolios: &[UserPortfolio],
    metric: F,
    viewer_id: &str,
) -> Result<Vec<RankedEntry>>
where
    F: Fn(&UserPortfolio) -> Decimal,
{
    if portfolios.is_empty() {
        return Err(Error::invalid_input("cannot rank an empty set of users"));
    }
    if !portfolios.iter().any(|p| p.user.id == viewer_id) {
        return Err(Error::invalid_input(format!(
            "viewer '{}' is not a member of the ranked users",
            viewer_id
        )));
    }

    let mut scored: Vec<(Decimal, &UserPortfolio)> =
        portfolios.iter().map(|p| (metric(p), p)).collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    debug!("Ranked {} users for viewer {}", scored.len(), viewer_id);

    Ok(scored
        .into_iter()
        .enumerate()
        .map(|(index, (metric_value, portfolio))| {
            let user = profile_view(portfolio, viewer_id);
            RankedEntry {
                rank: index + 1,
                metric_value,
                visible: !user.read_only,
                user,
            }
        })
        .collect())
}

/// [`rank`] with one of the built-in metrics.
pub fn rank_by_metric(
    portfolios: &[UserPortfolio],
    metric: RankMetric,
    viewer_id: &str,
) -> Result<Vec<RankedEntry>> {
    rank(portfolios, |p| metric.value(p), viewer_id)
}

/// The top `size` entries of an already ranked leaderboard.
pub fn podium(entries: &[RankedEntry], size: usize) -> Vec<RankedEntry> {
    entries.iter().take(size).cloned().collect()
}
