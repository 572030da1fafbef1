//! The unit a producer hands to a topic and a consumer receives from its
//! delivery queue.

use serde::{Deserialize, Serialize};

/// A message produced for a topic or delivered on a queue.
///
/// Producers may leave `id` empty and `subject` blank; the in-memory
/// producer fills both in from the topic name when the message is sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    /// Topic name on the producing side
    pub subject: String,
    pub payload: Vec<u8>,
    /// Ordered key/value headers, first match wins on lookup
    pub metadata: Option<Vec<(String, String)>>,
}

impl Message {
    pub fn new(id: impl Into<String>, subject: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            payload,
            metadata: None,
        }
    }

    /// Build a message whose payload is `payload` in bitcode form, for
    /// consumers on the same crate version.
    pub fn encode<T: Serialize>(
        id: impl Into<String>,
        subject: impl Into<String>,
        payload: &T,
    ) -> Result<Self, bitcode::Error> {
        let bytes = bitcode::serialize(payload)?;
        Ok(Self::new(id, subject, bytes))
    }

    /// Read back a payload built with [`encode`](Self::encode).
    pub fn decode<T: serde::de::DeserializeOwned>(&self) -> Result<T, bitcode::Error> {
        bitcode::deserialize(&self.payload)
    }

    /// Build a message with a JSON payload, tagged `content-type:
    /// application/json` for consumers outside this crate.
    pub fn encode_json<T: Serialize>(
        id: impl Into<String>,
        subject: impl Into<String>,
        payload: &T,
    ) -> Result<Self, serde_json::Error> {
        let bytes = serde_json::to_vec(payload)?;
        Ok(Self::new(id, subject, bytes).with_metadata("content-type", "application/json"))
    }

    pub fn decode_json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.payload)
    }

    pub fn with_string_payload(
        id: impl Into<String>,
        subject: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self::new(id, subject, payload.into().into_bytes())
    }

    /// Append a header. Existing keys are not replaced.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata
            .as_ref()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The payload as text, if it is UTF-8.
    pub fn payload_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.payload).ok()
    }
}
