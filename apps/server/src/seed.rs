//! Demo market and friend group served when no external source is wired in.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use stockshare_core::portfolio::positions::Position;
use stockshare_core::quotes::Quote;
use stockshare_core::users::User;

fn quote(
    symbol: &str,
    name: &str,
    price: Decimal,
    change: Decimal,
    change_percent: Decimal,
    sector: &str,
) -> Quote {
    Quote {
        symbol: symbol.to_string(),
        name: Some(name.to_string()),
        price,
        change,
        change_percent,
        sector: Some(sector.to_string()),
    }
}

/// TWSE quotes for the demo market.
pub fn demo_quotes() -> Vec<Quote> {
    vec![
        quote("2330", "TSMC", dec!(780.00), dec!(15.00), dec!(1.96), "Semiconductors"),
        quote("2454", "MediaTek", dec!(1150.00), dec!(-20.00), dec!(-1.71), "Semiconductors"),
        quote("2317", "Hon Hai", dec!(145.50), dec!(4.50), dec!(3.19), "Electronics Manufacturing"),
        quote("0050", "Yuanta Taiwan 50", dec!(155.20), dec!(1.20), dec!(0.78), "ETF"),
        quote("2603", "Evergreen Marine", dec!(175.00), dec!(-3.50), dec!(-1.96), "Shipping"),
        quote("3231", "Wistron", dec!(120.00), dec!(8.50), dec!(7.62), "Computer Peripherals"),
    ]
}

fn user(
    id: &str,
    name: &str,
    avatar: u32,
    roi: Decimal,
    positions: Vec<Position>,
    watchlist: &[&str],
) -> User {
    User {
        avatar_url: Some(format!("https://picsum.photos/id/{}/200/200", avatar)),
        positions,
        watchlist: watchlist.iter().map(|s| s.to_string()).collect(),
        ..User::new(id, name, roi)
    }
}

/// The viewer `u1` and their private friend group, in leaderboard tie-break order.
pub fn demo_users() -> Vec<User> {
    vec![
        user(
            "u1",
            "Alex",
            64,
            dec!(18.5),
            vec![
                Position::new("h1", "2330", dec!(600.00), dec!(2000)),
                Position::new("h2", "0050", dec!(140.00), dec!(5000)),
                Position::new("h3", "3231", dec!(110.00), dec!(1000)),
            ],
            &["2454", "2603"],
        ),
        user(
            "f1",
            "Sarah",
            65,
            dec!(42.1),
            vec![Position::new("fh1", "2317", dec!(100), dec!(5000))],
            &["2330", "2317"],
        ),
        user(
            "f2",
            "Day-trader Wei",
            91,
            dec!(-5.4),
            vec![Position::new("fh3", "2603", dec!(200), dec!(1000))],
            &["2609"],
        ),
        user("f3", "Leek King", 103, dec!(-25.4), Vec::new(), &["6547", "3035"]),
    ]
}
