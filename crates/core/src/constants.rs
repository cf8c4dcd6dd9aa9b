use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default base currency of the Taiwan market dashboard
pub const DEFAULT_BASE_CURRENCY: &str = "TWD";

/// Number of entries shown on the leaderboard podium
pub const DEFAULT_PODIUM_SIZE: usize = 3;

/// Highest per-share price (and previous close) a quote may carry
pub const MAX_QUOTE_PRICE: Decimal = dec!(1_000_000_000);
