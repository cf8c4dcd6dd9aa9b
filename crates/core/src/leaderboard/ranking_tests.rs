#[cfg(test)]
mod tests {
    use crate::leaderboard::{podium, profile_view, rank, rank_by_metric, RankMetric};
    use crate::portfolio::positions::Position;
    use crate::portfolio::valuation::{value_portfolio, MissingQuotePolicy, UserPortfolio};
    use crate::quotes::{Quote, QuoteSnapshot};
    use crate::users::User;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    fn market() -> QuoteSnapshot {
        QuoteSnapshot::new(vec![
            Quote {
                change: dec!(15),
                ..Quote::new("2330", dec!(780))
            },
            Quote {
                change: dec!(4.5),
                ..Quote::new("2317", dec!(145.5))
            },
            Quote {
                change: dec!(-3.5),
                ..Quote::new("2603", dec!(175))
            },
            Quote::new("9910", dec!(150)),
        ])
    }

    fn portfolio(user: User) -> UserPortfolio {
        let valuation = value_portfolio(&user, &market(), MissingQuotePolicy::Reject).unwrap();
        UserPortfolio { user, valuation }
    }

    /// Alex (18.5), Sarah (42.1), Wei (-5.4) in that input order.
    fn group() -> Vec<UserPortfolio> {
        vec![
            portfolio(User::new("u1", "Alex", dec!(18.5)).with_positions(vec![
                Position::new("h1", "2330", dec!(600), dec!(2000)),
            ])),
            portfolio(User::new("f1", "Sarah", dec!(42.1)).with_positions(vec![
                Position::new("fh1", "2317", dec!(100), dec!(5000)),
            ])),
            portfolio(User::new("f2", "Wei", dec!(-5.4)).with_positions(vec![
                Position::new("fh3", "2603", dec!(200), dec!(1000)),
            ])),
        ]
    }

    fn ids_and_ranks(entries: &[crate::leaderboard::RankedEntry]) -> Vec<(String, usize)> {
        entries
            .iter()
            .map(|e| (e.user.user_id.clone(), e.rank))
            .collect()
    }

    #[test]
    fn test_rank_by_roi_descending() {
        let entries = rank_by_metric(&group(), RankMetric::Roi, "u1").unwrap();

        assert_eq!(
            ids_and_ranks(&entries),
            vec![
                ("f1".to_string(), 1),
                ("u1".to_string(), 2),
                ("f2".to_string(), 3)
            ]
        );
        let metrics: Vec<Decimal> = entries.iter().map(|e| e.metric_value).collect();
        assert_eq!(metrics, vec![dec!(42.1), dec!(18.5), dec!(-5.4)]);
    }

    #[test]
    fn test_only_viewer_totals_visible() {
        let entries = rank_by_metric(&group(), RankMetric::Roi, "u1").unwrap();

        for entry in &entries {
            let is_viewer = entry.user.user_id == "u1";
            assert_eq!(entry.visible, is_viewer);
            assert_eq!(entry.user.read_only, !is_viewer);
            assert_eq!(entry.user.total_equity.is_some(), is_viewer);
            assert_eq!(entry.user.day_change.is_some(), is_viewer);
            for position in &entry.user.positions {
                assert_eq!(position.average_cost.is_some(), is_viewer);
                assert_eq!(position.market_value.is_some(), is_viewer);
                assert_eq!(position.quantity.is_some(), is_viewer);
            }
        }

        let viewer = entries.iter().find(|e| e.visible).unwrap();
        assert_eq!(viewer.user.total_equity, Some(dec!(1560000)));
        assert_eq!(viewer.user.positions[0].average_cost, Some(dec!(600)));
    }

    #[test]
    fn test_relative_metrics_stay_visible_for_friends() {
        let entries = rank_by_metric(&group(), RankMetric::Roi, "u1").unwrap();
        let sarah = entries.iter().find(|e| e.user.user_id == "f1").unwrap();

        assert_eq!(sarah.user.roi, dec!(42.1));
        assert_eq!(sarah.user.positions[0].unrealized_pnl_percent, dec!(45.5));
        assert_eq!(sarah.user.positions[0].current_price, dec!(145.5));
        assert_eq!(sarah.user.positions[0].weight, dec!(100));
        // (727500 - 705000) / 705000 * 100
        assert_eq!(
            sarah.user.day_change_percent,
            dec!(22500) / dec!(705000) * dec!(100)
        );
    }

    #[test]
    fn test_masked_entry_serialization_omits_absolute_values() {
        let mut portfolios = group();
        portfolios.push(portfolio(
            User::new("f4", "Mei", dec!(3.3)).with_positions(vec![Position::new(
                "fh9",
                "9910",
                dec!(123.45),
                dec!(777),
            )]),
        ));

        let entries = rank_by_metric(&portfolios, RankMetric::Roi, "u1").unwrap();
        let mei = entries.iter().find(|e| e.user.user_id == "f4").unwrap();
        assert_eq!(mei.user.positions.len(), 1);

        let json = serde_json::to_string(mei).unwrap();
        assert!(!json.contains("123.45"));
        assert!(!json.contains("116550"));

        let value = serde_json::to_value(mei).unwrap();
        for key in ["totalEquity", "dayChange", "totalCostBasis"] {
            assert!(value["user"].get(key).is_none(), "{} leaked", key);
        }
        for key in ["averageCost", "quantity", "marketValue", "unrealizedPnL", "dayChange"] {
            assert!(
                value["user"]["positions"][0].get(key).is_none(),
                "{} leaked",
                key
            );
        }
        assert!(value["user"]["positions"][0]
            .get("unrealizedPnLPercent")
            .is_some());
    }

    #[test]
    fn test_tie_keeps_input_order() {
        let portfolios = vec![
            portfolio(User::new("a", "First", dec!(10))),
            portfolio(User::new("b", "Second", dec!(25))),
            portfolio(User::new("c", "Third", dec!(10))),
            portfolio(User::new("d", "Fourth", dec!(10.0))),
        ];

        let entries = rank_by_metric(&portfolios, RankMetric::Roi, "c").unwrap();

        assert_eq!(
            ids_and_ranks(&entries),
            vec![
                ("b".to_string(), 1),
                ("a".to_string(), 2),
                ("c".to_string(), 3),
                ("d".to_string(), 4)
            ]
        );
    }

    #[test]
    fn test_rank_is_idempotent() {
        let portfolios = group();
        let first = rank_by_metric(&portfolios, RankMetric::Roi, "f2").unwrap();
        let second = rank_by_metric(&portfolios, RankMetric::Roi, "f2").unwrap();
        assert_eq!(first, second);

        // Re-ranking the already ranked order yields the same ranks.
        let reordered: Vec<UserPortfolio> = first
            .iter()
            .map(|entry| {
                portfolios
                    .iter()
                    .find(|p| p.user.id == entry.user.user_id)
                    .cloned()
                    .unwrap()
            })
            .collect();
        let third = rank_by_metric(&reordered, RankMetric::Roi, "f2").unwrap();
        assert_eq!(ids_and_ranks(&first), ids_and_ranks(&third));
    }

    #[test]
    fn test_rank_empty_rejected() {
        let err = rank(&[], |p| p.user.roi, "u1").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_rank_unknown_viewer_rejected() {
        let err = rank_by_metric(&group(), RankMetric::Roi, "stranger").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_custom_metric_selector() {
        let entries = rank(
            &group(),
            |p| p.valuation.summary.total_equity,
            "u1",
        )
        .unwrap();

        assert_eq!(entries[0].user.user_id, "u1");
        assert_eq!(entries[0].metric_value, dec!(1560000));
    }

    #[test]
    fn test_rank_by_holdings_roi_scores_empty_portfolio_zero() {
        let mut portfolios = group();
        portfolios.push(portfolio(User::new("f3", "Leek King", dec!(-25.4))));

        let entries = rank_by_metric(&portfolios, RankMetric::HoldingsRoi, "u1").unwrap();

        // Sarah 45.5, Alex 30, empty 0, Wei -12.5
        let order: Vec<&str> = entries.iter().map(|e| e.user.user_id.as_str()).collect();
        assert_eq!(order, vec!["f1", "u1", "f3", "f2"]);
        assert_eq!(entries[2].metric_value, Decimal::ZERO);
        assert_eq!(entries[2].user.holdings_roi, None);
    }

    #[test]
    fn test_podium_takes_top_entries() {
        let entries = rank_by_metric(&group(), RankMetric::Roi, "u1").unwrap();

        let top = podium(&entries, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].rank, 1);
        assert_eq!(top[1].rank, 2);

        assert_eq!(podium(&entries, 10).len(), 3);
    }

    #[test]
    fn test_profile_view_for_self_and_friend() {
        let portfolios = group();
        let own = profile_view(&portfolios[0], "u1");
        let friend = profile_view(&portfolios[0], "f1");

        assert!(!own.read_only);
        assert_eq!(own.total_equity, Some(dec!(1560000)));
        assert_eq!(own.positions[0].unrealized_pnl, Some(dec!(360000)));

        assert!(friend.read_only);
        assert_eq!(friend.total_equity, None);
        assert_eq!(friend.roi, own.roi);
        assert_eq!(friend.day_change_percent, own.day_change_percent);
    }

    #[test]
    fn test_rank_metric_from_str() {
        assert_eq!(RankMetric::from_str("roi").unwrap(), RankMetric::Roi);
        assert_eq!(
            RankMetric::from_str("dayChangePercent").unwrap(),
            RankMetric::DayChangePercent
        );
        assert_eq!(
            RankMetric::from_str("holdings_roi").unwrap(),
            RankMetric::HoldingsRoi
        );
        assert!(RankMetric::from_str("volume").is_err());
        assert_eq!(
            serde_json::to_string(&RankMetric::DayChangePercent).unwrap(),
            "\"dayChangePercent\""
        );
    }
}
