use serde::{Deserialize, Serialize};

/// A named publish channel managed by the subscription-management service.
///
/// The `id` is assigned by the service; a topic built locally for creation
/// carries only its name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

impl Topic {
    /// A topic that has not been created by the service yet.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// A topic record as returned by the service.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
        }
    }

    /// Pick the first topic whose name matches exactly (case-sensitive).
    pub fn find_by_name<'a>(topics: &'a [Topic], name: &str) -> Option<&'a Topic> {
        topics.iter().find(|topic| topic.name == name)
    }
}
