use serde::{Deserialize, Serialize};

use crate::users::User;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewState {
    #[default]
    Dashboard,
    Group,
    FriendProfile,
    WinningCheck,
    ArchitectReview,
    Settings,
}

/// What the dashboard is showing. Transitions consume the state and return the
/// next one, so the state can be passed around and persisted by the caller.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    pub view: ViewState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_symbol: Option<String>,
    pub sidebar_open: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            view: ViewState::Dashboard,
            selected_user_id: None,
            active_symbol: None,
            sidebar_open: true,
        }
    }
}

impl DashboardState {
    pub fn new(active_symbol: Option<String>) -> Self {
        Self {
            active_symbol,
            ..Default::default()
        }
    }

    /// Switches view. Leaving the friend profile drops the selected friend.
    pub fn navigate(self, view: ViewState) -> Self {
        let selected_user_id = if view == ViewState::FriendProfile {
            self.selected_user_id
        } else {
            None
        };
        Self {
            view,
            selected_user_id,
            ..self
        }
    }

    /// Opens a friend's profile and charts their first holding, if any.
    pub fn select_friend(self, friend: &User) -> Self {
        let active_symbol = friend
            .first_symbol()
            .map(str::to_string)
            .or(self.active_symbol);
        Self {
            view: ViewState::FriendProfile,
            selected_user_id: Some(friend.id.clone()),
            active_symbol,
            ..self
        }
    }

    pub fn select_symbol(self, symbol: impl Into<String>) -> Self {
        Self {
            active_symbol: Some(symbol.into()),
            ..self
        }
    }

    pub fn toggle_sidebar(self) -> Self {
        Self {
            sidebar_open: !self.sidebar_open,
            ..self
        }
    }

    /// The user whose portfolio is on screen.
    pub fn display_user_id<'a>(&'a self, viewer_id: &'a str) -> &'a str {
        match (&self.view, &self.selected_user_id) {
            (ViewState::FriendProfile, Some(user_id)) => user_id.as_str(),
            _ => viewer_id,
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.view == ViewState::FriendProfile && self.selected_user_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::positions::Position;
    use rust_decimal_macros::dec;

    fn sarah() -> User {
        User::new("f1", "Sarah", dec!(42.1)).with_positions(vec![Position::new(
            "fh1",
            "2317",
            dec!(100),
            dec!(5000),
        )])
    }

    #[test]
    fn test_default_shows_own_dashboard() {
        let state = DashboardState::new(Some("2330".to_string()));
        assert_eq!(state.view, ViewState::Dashboard);
        assert!(state.sidebar_open);
        assert!(!state.is_read_only());
        assert_eq!(state.display_user_id("u1"), "u1");
    }

    #[test]
    fn test_select_friend_is_read_only_and_charts_first_holding() {
        let state = DashboardState::new(Some("2330".to_string())).select_friend(&sarah());

        assert_eq!(state.view, ViewState::FriendProfile);
        assert!(state.is_read_only());
        assert_eq!(state.display_user_id("u1"), "f1");
        assert_eq!(state.active_symbol.as_deref(), Some("2317"));
    }

    #[test]
    fn test_select_friend_without_holdings_keeps_symbol() {
        let empty = User::new("f3", "Leek King", dec!(-25.4));
        let state = DashboardState::new(Some("2330".to_string())).select_friend(&empty);

        assert_eq!(state.active_symbol.as_deref(), Some("2330"));
        assert_eq!(state.display_user_id("u1"), "f3");
    }

    #[test]
    fn test_navigate_away_clears_selection() {
        let state = DashboardState::default()
            .select_friend(&sarah())
            .navigate(ViewState::Group);

        assert_eq!(state.selected_user_id, None);
        assert!(!state.is_read_only());
        assert_eq!(state.display_user_id("u1"), "u1");
        // The charted symbol survives navigation
        assert_eq!(state.active_symbol.as_deref(), Some("2317"));
    }

    #[test]
    fn test_toggle_sidebar_and_select_symbol() {
        let state = DashboardState::default()
            .toggle_sidebar()
            .select_symbol("0050");
        assert!(!state.sidebar_open);
        assert_eq!(state.active_symbol.as_deref(), Some("0050"));
        assert!(state.toggle_sidebar().sidebar_open);
    }

    #[test]
    fn test_state_serialization() {
        let state = DashboardState::default().select_friend(&sarah());
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["view"], "FRIEND_PROFILE");
        assert_eq!(json["selectedUserId"], "f1");

        let back: DashboardState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
