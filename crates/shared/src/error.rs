use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("{kind} message is missing `{field}`")]
    MissingField { kind: String, field: &'static str },
    #[error("{kind} message has an invalid payload: {reason}")]
    InvalidPayload { kind: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("submission positions start at 1")]
pub struct PositionError;
