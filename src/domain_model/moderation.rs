use crate::domain_model::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Only carried through login responses. Nothing in this crate issues them.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Punishment {
    pub id: String,
    pub punished: UserId,
    pub reason: String,
    pub expire: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Whisper {
    pub id: String,
    pub sender: UserId,
    pub recipient: UserId,
    pub content: String,
    pub sent: DateTime<Utc>,
}
