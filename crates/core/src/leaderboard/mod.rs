//! Leaderboard module - viewer-aware ranking of users and the masked
//! view-models handed to the presentation layer.

mod leaderboard_model;
mod ranking;
mod visibility;

#[cfg(test)]
mod ranking_tests;

pub use leaderboard_model::*;
pub use ranking::{podium, rank, rank_by_metric};
pub use visibility::{position_view, profile_view};
