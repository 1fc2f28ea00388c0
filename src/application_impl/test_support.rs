//! Fake collaborators shared by the service tests.

use crate::domain_model::*;
use crate::domain_port::*;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Mutex;

pub fn uid(n: u128) -> UserId {
    UserId(uuid::Uuid::from_u128(n))
}

pub fn known(n: u128, name: &str, online: bool) -> DirectoryUser {
    DirectoryUser {
        id: uid(n),
        last_known_name: Some(name.to_string()),
        online,
        last_seen: Some(Utc::now()),
    }
}

/// Resolver over a fixed set of entries that records every call it gets.
#[derive(Debug, Default)]
pub struct CountingFinder {
    entries: Vec<DirectoryUser>,
    id_calls: Mutex<Vec<UserId>>,
    name_calls: Mutex<Vec<String>>,
    fail: bool,
}

impl CountingFinder {
    pub fn new(entries: Vec<DirectoryUser>) -> Self {
        CountingFinder {
            entries,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        CountingFinder {
            fail: true,
            ..Default::default()
        }
    }

    pub fn id_calls(&self) -> Vec<UserId> {
        self.id_calls.lock().unwrap().clone()
    }

    pub fn name_calls(&self) -> Vec<String> {
        self.name_calls.lock().unwrap().clone()
    }

    pub fn id_call_counts(&self) -> HashMap<UserId, usize> {
        let mut counts = HashMap::new();
        for id in self.id_calls() {
            *counts.entry(id).or_insert(0) += 1;
        }
        counts
    }
}

#[async_trait::async_trait]
impl UserFinder for CountingFinder {
    async fn find_user_by_id(&self, user_id: UserId) -> anyhow::Result<DirectoryUser> {
        self.id_calls.lock().unwrap().push(user_id);
        if self.fail {
            anyhow::bail!("directory offline");
        }
        Ok(self
            .entries
            .iter()
            .find(|e| e.id == user_id)
            .cloned()
            .unwrap_or_else(|| DirectoryUser::unknown(user_id)))
    }

    async fn find_user_by_name(&self, username: &str) -> anyhow::Result<DirectoryUser> {
        self.name_calls.lock().unwrap().push(username.to_string());
        if self.fail {
            anyhow::bail!("directory offline");
        }
        Ok(self
            .entries
            .iter()
            .find(|e| e.last_known_name.as_deref() == Some(username))
            .cloned()
            .unwrap_or_else(|| DirectoryUser::unknown(uid(0))))
    }
}

#[derive(Debug, Default)]
pub struct StubUserFactory;

impl UserFactory for StubUserFactory {
    fn create_user(&self, user_id: UserId, username: &str, seen_at: DateTime<Utc>) -> DirectoryUser {
        DirectoryUser {
            id: user_id,
            last_known_name: Some(username.to_string()),
            online: true,
            last_seen: Some(seen_at),
        }
    }
}

#[derive(Debug, Default)]
pub struct StubSessionFactory;

impl SessionFactory for StubSessionFactory {
    fn new_session(&self, user: &User, ip: IpAddr) -> Session {
        Session {
            id: SessionId(format!("session-{}", user.id())),
            user_id: user.id(),
            username: user.username().unwrap_or_default().to_string(),
            server_id: "test".to_string(),
            ip,
            start: Utc::now(),
            end: None,
        }
    }
}
