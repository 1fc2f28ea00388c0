use crate::domain_model::*;

/// Identity resolver backing the user service.
///
/// Lookups never report "absent" as an error. A player that was never seen
/// resolves to a [`DirectoryUser`] without a last known name, and the caller
/// decides what that means. Errors are reserved for the backend itself failing.
#[async_trait::async_trait]
pub trait UserFinder: Send + Sync {
    async fn find_user_by_id(&self, user_id: UserId) -> anyhow::Result<DirectoryUser>;

    async fn find_user_by_name(&self, username: &str) -> anyhow::Result<DirectoryUser>;
}
