//! Activity plan — a user, their closest friends, and places to go together.

use serde::{Deserialize, Serialize};
use super::{PlaceProfile, UserProfile};

/// Bundle produced by `plan_activities`.
///
/// `close_friends` is ordered nearest first; `suggested_places` is ordered
/// most suitable first. An empty plan (no user) is returned when either
/// limit is zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActivityPlan {
    pub user: Option<UserProfile>,
    pub close_friends: Vec<UserProfile>,
    pub suggested_places: Vec<PlaceProfile>,
}

impl ActivityPlan {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.close_friends.is_empty() && self.suggested_places.is_empty()
    }
}
