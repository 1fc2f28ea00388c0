use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Player identifier, normalised to a UUID.
///
/// Raw ids arrive both hyphenated and in the 32-digit simple form, in either
/// case. Parsing folds all of them onto the same value, so equality and
/// hashing are by normalised id.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct UserId(pub uuid::Uuid);

impl UserId {
    pub fn normalize(raw: &str) -> Result<UserId, uuid::Error> {
        uuid::Uuid::parse_str(raw.trim()).map(UserId)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserId::normalize(s)
    }
}

impl From<uuid::Uuid> for UserId {
    fn from(uuid: uuid::Uuid) -> Self {
        UserId(uuid)
    }
}

/// Raw directory entry as returned by a [`UserFinder`](crate::domain_port::UserFinder).
///
/// A missing `last_known_name` means the player has never been seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub id: UserId,
    pub last_known_name: Option<String>,
    pub online: bool,
    pub last_seen: Option<DateTime<Utc>>,
}

impl DirectoryUser {
    pub fn unknown(id: UserId) -> Self {
        DirectoryUser {
            id,
            last_known_name: None,
            online: false,
            last_seen: None,
        }
    }

    pub fn has_history(&self) -> bool {
        self.last_known_name.is_some()
    }
}

/// Resolved user snapshot handed to callers of the user service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    entry: DirectoryUser,
}

impl User {
    pub fn new(entry: DirectoryUser) -> Self {
        User { entry }
    }

    pub fn id(&self) -> UserId {
        self.entry.id
    }

    pub fn username(&self) -> Option<&str> {
        self.entry.last_known_name.as_deref()
    }

    pub fn is_online(&self) -> bool {
        self.entry.online
    }

    pub fn last_seen(&self) -> Option<DateTime<Utc>> {
        self.entry.last_seen
    }

    pub fn entry(&self) -> &DirectoryUser {
        &self.entry
    }
}
