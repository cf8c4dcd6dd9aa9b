//! Portfolio valuation: positions, the valuation engine and the service that
//! ties users, quotes and rankings together.

pub mod portfolio_service;
pub mod positions;
pub mod valuation;


pub use portfolio_service::{PortfolioService, PortfolioServiceTrait};
pub use positions::*;
pub use valuation::*;
