use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    domain::{HeaderDetails, Issue, SubmissionPosition},
    error::DecodeError,
};

pub const SHOW_PUBLIC_UI: &str = "showPublicUI";
pub const OWNER_UI: &str = "owner_ui";

/// Messages the host pushes into the overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostMessage {
    #[serde(rename = "showPublicUI")]
    ShowPublicUi {
        #[serde(rename = "issueData")]
        issue_data: Issue,
    },
    #[serde(rename = "owner_ui")]
    OwnerUi,
}

/// Outcome of decoding one inbound message.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Message(HostMessage),
    /// No recognized `type`. Carries the payload as received, including text
    /// that was not JSON at all.
    Unrecognized(Value),
    /// A recognized `type` whose payload did not fit.
    Rejected(DecodeError),
}

/// Decodes a message that is either JSON text or an already-parsed value.
pub fn decode_message(data: &Value) -> Decoded {
    match data {
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(parsed) => decode_value(parsed),
            Err(_) => Decoded::Unrecognized(data.clone()),
        },
        other => decode_value(other.clone()),
    }
}

/// Decodes a message given as raw text. Non-JSON text is passed through.
pub fn decode_text(raw: &str) -> Decoded {
    decode_message(&Value::String(raw.to_string()))
}

fn decode_value(value: Value) -> Decoded {
    let kind = value.get("type").and_then(Value::as_str).map(str::to_owned);
    let Some(kind) = kind else {
        return Decoded::Unrecognized(value);
    };
    if kind != SHOW_PUBLIC_UI && kind != OWNER_UI {
        return Decoded::Unrecognized(value);
    }
    if kind == SHOW_PUBLIC_UI && value.get("issueData").map_or(true, Value::is_null) {
        return Decoded::Rejected(DecodeError::MissingField {
            kind,
            field: "issueData",
        });
    }

    match serde_json::from_value::<HostMessage>(value) {
        Ok(message) => Decoded::Message(message),
        Err(err) => Decoded::Rejected(DecodeError::InvalidPayload {
            kind,
            reason: err.to_string(),
        }),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmptyRequest {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionActionRequest {
    pub index: SubmissionPosition,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionActionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishRequest {
    #[serde(rename = "headerDetails")]
    pub header_details: HeaderDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishResponse {
    #[serde(default)]
    pub ok: bool,
}
