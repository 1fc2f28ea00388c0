use crate::domain_model::*;
use crate::domain_port::*;
use chrono::Utc;
use nanoid::nanoid;
use std::net::IpAddr;

const SESSION_ID_LEN: usize = 20;

/// Opens sessions on the local server. Nothing is persisted.
#[derive(Debug, Clone)]
pub struct LocalSessionFactory {
    server_id: String,
}

impl LocalSessionFactory {
    pub fn new(server_id: impl Into<String>) -> Self {
        LocalSessionFactory {
            server_id: server_id.into(),
        }
    }
}

impl SessionFactory for LocalSessionFactory {
    fn new_session(&self, user: &User, ip: IpAddr) -> Session {
        Session {
            id: SessionId(nanoid!(SESSION_ID_LEN)),
            user_id: user.id(),
            username: user.username().unwrap_or_default().to_string(),
            server_id: self.server_id.clone(),
            ip,
            start: Utc::now(),
            end: None,
        }
    }
}
