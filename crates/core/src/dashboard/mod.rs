//! Explicit, serializable dashboard UI state.

mod dashboard_state;

pub use dashboard_state::{DashboardState, ViewState};
