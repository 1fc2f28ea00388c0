use crate::domain_model::*;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserError {
    #[error("{0}")]
    NotFound(String),
    #[error("user lookup failed: {0}")]
    Resolver(String),
    #[error("internal error: {0}")]
    Internal(String),
}

// region requests

#[derive(Debug, Clone, Deserialize)]
pub struct UserSearchRequest {
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub player_id: UserId,
    pub username: String,
    pub ip: IpAddr,
    pub start_session: bool,
    pub virtual_host: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogoutRequest {
    pub player_id: UserId,
    pub session_id: Option<SessionId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreditRaindropsRequest {
    pub raindrops: i64,
    pub max_raindrops: Option<i64>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseGizmoRequest {
    pub gizmo_name: String,
    pub price: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub nickname: Option<String>,
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChangeSettingRequest {
    pub profile: Option<String>,
    pub setting: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChangeClassRequest {
    pub category: String,
    pub name: String,
}

// endregion

// region responses

#[derive(Debug, Clone, Serialize)]
pub struct UserSearchResponse {
    pub user: User,
    pub online: bool,
    pub disguised: bool,
    pub last_session: Option<Session>,
    pub last_server_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub user: User,
    pub session: Option<Session>,
    /// Reason to refuse the connection, if any.
    pub kick: Option<String>,
    pub message: Option<String>,
    pub route_to_server: Option<String>,
    pub punishment: Option<Punishment>,
    pub whispers: Vec<Whisper>,
    pub unread_appeal_count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserUpdateResponse {
    pub success: bool,
    pub user: User,
}

// endregion

#[async_trait::async_trait]
pub trait UserService: Send + Sync {
    async fn find(&self, user_id: UserId) -> Result<User, UserError>;
    async fn search(&self, request: UserSearchRequest) -> Result<UserSearchResponse, UserError>;
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, UserError>;
    async fn logout(&self, request: LogoutRequest) -> Result<(), UserError>;

    async fn credit_raindrops(
        &self,
        user_id: UserId,
        request: CreditRaindropsRequest,
    ) -> Result<UserUpdateResponse, UserError>;
    async fn purchase_gizmo(
        &self,
        user_id: UserId,
        request: PurchaseGizmoRequest,
    ) -> Result<User, UserError>;
    async fn update(&self, user_id: UserId, update: UserUpdate) -> Result<User, UserError>;
    async fn change_setting(
        &self,
        user_id: UserId,
        request: ChangeSettingRequest,
    ) -> Result<User, UserError>;
    async fn change_class(
        &self,
        user_id: UserId,
        request: ChangeClassRequest,
    ) -> Result<User, UserError>;
}
