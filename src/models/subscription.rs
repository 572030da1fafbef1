use serde::{Deserialize, Serialize};

/// A subscription record binding a delivery queue to a topic.
///
/// Built locally with only `topic_id` set; the service fills in the id and
/// the queue. Callers keep the returned value and hand it back for pause,
/// resume and unsubscribe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(default)]
    pub id: String,
    pub topic_id: String,
    #[serde(default)]
    pub queue: String,
    #[serde(default = "active_by_default")]
    pub active: bool,
}

fn active_by_default() -> bool {
    true
}

impl Subscription {
    /// A subscription request for the given topic.
    pub fn for_topic(topic_id: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            topic_id: topic_id.into(),
            queue: String::new(),
            active: true,
        }
    }
}

/// Partial update of a subscription record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl SubscriptionUpdate {
    pub fn active(active: bool) -> Self {
        Self {
            active: Some(active),
        }
    }
}
