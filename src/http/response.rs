//! Response envelope.
//!
//! Every endpoint returns the same JSON wrapper. Envelopes are constructed
//! fresh per request and serialized immediately; nothing holds one after
//! the response is written.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

/// Outcome discriminator for the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Uniform JSON response wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    #[serde(rename = "Status")]
    pub status: Status,

    #[serde(rename = "Message")]
    pub message: String,

    /// Nanoseconds since epoch at envelope construction.
    #[serde(rename = "Time")]
    pub time: i64,

    /// String key/value payload; `null` when the endpoint carries none.
    #[serde(rename = "Data")]
    pub data: Option<BTreeMap<String, String>>,
}

impl Envelope {
    /// Success envelope with a payload.
    pub fn success(message: &str, data: BTreeMap<String, String>) -> Self {
        Self {
            status: Status::Success,
            message: message.to_string(),
            time: now_nanos(),
            data: Some(data),
        }
    }

    /// Success envelope without a payload (`Data: null`).
    pub fn success_empty(message: &str) -> Self {
        Self {
            status: Status::Success,
            message: message.to_string(),
            time: now_nanos(),
            data: None,
        }
    }
}

/// Current wall-clock time as integer nanoseconds since epoch.
pub fn now_nanos() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_nanos()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// Map an ordered list of names to the `/tables` payload shape:
/// stringified zero-based index → name.
pub fn indexed(names: &[String]) -> BTreeMap<String, String> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| (i.to_string(), name.clone()))
        .collect()
}
