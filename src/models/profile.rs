use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// The logged-in user as the backend reports it. Subscription status is
/// read-only from the client's point of view.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub subscription_status: SubscriptionStatus,
    #[serde(default)]
    pub date_joined: Option<String>,
}

/// Binary flag controlling cosmetic UI state only. Anything the backend sends
/// other than `SUBSCRIBED` renders as inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Display)]
pub enum SubscriptionStatus {
    #[serde(rename = "SUBSCRIBED")]
    #[strum(serialize = "Subscribed")]
    Subscribed,
    #[serde(other)]
    #[default]
    #[strum(serialize = "Inactive")]
    Inactive,
}

impl SubscriptionStatus {
    pub fn is_subscribed(&self) -> bool {
        matches!(self, Self::Subscribed)
    }
}

/// The only profile fields the client may change (`PUT /profile`).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileUpdate {
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_subscribed_profile() {
        let json = r#"{"username": "zen_user_99", "email": "zen@example.com",
                       "subscriptionStatus": "SUBSCRIBED",
                       "dateJoined": "2025-01-14"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert!(profile.subscription_status.is_subscribed());
        assert_eq!(profile.date_joined.as_deref(), Some("2025-01-14"));
    }

    #[test]
    fn unknown_status_and_missing_join_date_fall_back() {
        let json = r#"{"username": "a", "email": "a@b.c",
                       "subscriptionStatus": "TRIAL"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.subscription_status, SubscriptionStatus::Inactive);
        assert!(profile.date_joined.is_none());
    }
}
