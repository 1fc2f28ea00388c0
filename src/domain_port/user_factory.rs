use crate::domain_model::*;
use chrono::{DateTime, Utc};

pub trait UserFactory: Send + Sync {
    /// Build a directory entry for a player seen at `seen_at`.
    fn create_user(&self, user_id: UserId, username: &str, seen_at: DateTime<Utc>)
    -> DirectoryUser;
}
