use crate::domain_model::*;
use crate::domain_port::*;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

/// Player directory kept in process memory.
///
/// It serves as both the identity resolver and the user factory of a
/// standalone server. Names are matched case-insensitively. A name belongs to
/// whichever player last logged in with it.
#[derive(Debug, Default)]
pub struct MemoryUserDirectory {
    users: DashMap<UserId, DirectoryUser>,
    names: DashMap<String, UserId>,
}

impl MemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player known from an earlier run. Seeded players are offline.
    pub fn seed(&self, user_id: UserId, username: &str) {
        self.record(DirectoryUser {
            id: user_id,
            last_known_name: Some(username.to_string()),
            online: false,
            last_seen: None,
        });
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn record(&self, entry: DirectoryUser) {
        let id = entry.id;
        let new_key = entry.last_known_name.as_deref().map(name_key);
        let previous = self.users.insert(id, entry);

        // Overwrite in one step. The key is never missing while a player
        // keeps their name.
        if let Some(key) = &new_key {
            self.names.insert(key.clone(), id);
        }

        let old_key = previous.and_then(|p| p.last_known_name).map(|n| name_key(&n));
        if let Some(old_key) = old_key.filter(|old| Some(old) != new_key.as_ref()) {
            self.release_name(old_key, id);
        }
    }

    /// Drop `id`'s claim on a name it no longer uses. The name passes back to
    /// the most recently seen player still carrying it.
    fn release_name(&self, key: String, id: UserId) {
        if self.names.remove_if(&key, |_, owner| *owner == id).is_none() {
            return;
        }

        let heir = self
            .users
            .iter()
            .filter(|e| e.last_known_name.as_deref().map(name_key).as_ref() == Some(&key))
            .max_by_key(|e| e.last_seen)
            .map(|e| e.id);
        if let Some(heir) = heir {
            self.names.entry(key).or_insert(heir);
        }
    }
}

fn name_key(username: &str) -> String {
    username.to_lowercase()
}

/// Stable id for a name nobody has used, so repeated lookups agree.
fn offline_id(username: &str) -> UserId {
    UserId(uuid::Uuid::new_v5(
        &uuid::Uuid::NAMESPACE_OID,
        name_key(username).as_bytes(),
    ))
}

#[async_trait::async_trait]
impl UserFinder for MemoryUserDirectory {
    async fn find_user_by_id(&self, user_id: UserId) -> anyhow::Result<DirectoryUser> {
        Ok(self
            .users
            .get(&user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_else(|| DirectoryUser::unknown(user_id)))
    }

    async fn find_user_by_name(&self, username: &str) -> anyhow::Result<DirectoryUser> {
        let owner = self.names.get(&name_key(username)).map(|id| *id.value());

        let entry = owner.and_then(|id| self.users.get(&id).map(|entry| entry.value().clone()));
        Ok(entry.unwrap_or_else(|| DirectoryUser::unknown(offline_id(username))))
    }
}

impl UserFactory for MemoryUserDirectory {
    fn create_user(&self, user_id: UserId, username: &str, seen_at: DateTime<Utc>) -> DirectoryUser {
        let entry = DirectoryUser {
            id: user_id,
            last_known_name: Some(username.to_string()),
            online: true,
            last_seen: Some(seen_at),
        };
        self.record(entry.clone());
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid(n: u128) -> UserId {
        UserId(uuid::Uuid::from_u128(n))
    }

    #[tokio::test]
    async fn unknown_id_resolves_without_history() {
        let directory = MemoryUserDirectory::new();

        let entry = directory.find_user_by_id(uid(1)).await.unwrap();
        assert_eq!(entry.id, uid(1));
        assert!(!entry.has_history());
    }

    #[tokio::test]
    async fn unknown_name_resolves_to_stable_id() {
        let directory = MemoryUserDirectory::new();

        let first = directory.find_user_by_name("Ghost").await.unwrap();
        let second = directory.find_user_by_name("ghost").await.unwrap();
        assert!(!first.has_history());
        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn seeded_player_is_found_offline() {
        let directory = MemoryUserDirectory::new();
        directory.seed(uid(2), "Seeded");

        let by_id = directory.find_user_by_id(uid(2)).await.unwrap();
        assert_eq!(by_id.last_known_name.as_deref(), Some("Seeded"));
        assert!(!by_id.online);

        let by_name = directory.find_user_by_name("SEEDED").await.unwrap();
        assert_eq!(by_name.id, uid(2));
    }

    #[tokio::test]
    async fn created_user_is_online_and_findable() {
        let directory = MemoryUserDirectory::new();
        let now = Utc::now();

        let created = directory.create_user(uid(3), "Fresh", now);
        assert!(created.online);
        assert_eq!(created.last_seen, Some(now));

        let found = directory.find_user_by_id(uid(3)).await.unwrap();
        assert_eq!(found, created);
        assert_eq!(directory.len(), 1);
    }

    #[tokio::test]
    async fn rename_releases_old_name() {
        let directory = MemoryUserDirectory::new();
        directory.seed(uid(4), "OldName");
        directory.create_user(uid(4), "NewName", Utc::now());

        let old = directory.find_user_by_name("OldName").await.unwrap();
        assert!(!old.has_history());
        let new = directory.find_user_by_name("NewName").await.unwrap();
        assert_eq!(new.id, uid(4));
    }

    #[tokio::test]
    async fn relogin_under_same_name_keeps_index() {
        let directory = MemoryUserDirectory::new();
        directory.seed(uid(7), "Steady");
        directory.create_user(uid(7), "steady", Utc::now());

        let found = directory.find_user_by_name("STEADY").await.unwrap();
        assert_eq!(found.id, uid(7));
        assert_eq!(found.last_known_name.as_deref(), Some("steady"));
        assert!(found.online);
    }

    #[tokio::test]
    async fn renamed_owner_hands_name_back_to_earlier_holder() {
        let directory = MemoryUserDirectory::new();
        directory.seed(uid(8), "Shared");
        directory.create_user(uid(9), "Shared", Utc::now());
        directory.create_user(uid(9), "Elsewhere", Utc::now());

        let holder = directory.find_user_by_name("shared").await.unwrap();
        assert_eq!(holder.id, uid(8));
        let renamed = directory.find_user_by_name("elsewhere").await.unwrap();
        assert_eq!(renamed.id, uid(9));
    }

    #[tokio::test]
    async fn name_moves_to_latest_owner() {
        let directory = MemoryUserDirectory::new();
        directory.seed(uid(5), "Shared");
        directory.create_user(uid(6), "Shared", Utc::now());

        let owner = directory.find_user_by_name("shared").await.unwrap();
        assert_eq!(owner.id, uid(6));
        // the previous holder keeps its own history
        let previous = directory.find_user_by_id(uid(5)).await.unwrap();
        assert_eq!(previous.last_known_name.as_deref(), Some("Shared"));
    }
}
