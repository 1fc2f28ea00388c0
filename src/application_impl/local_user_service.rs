use crate::application_impl::NullModel;
use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::*;
use crate::logger::*;
use chrono::Utc;
use std::sync::Arc;

/// User service for a standalone server with no API backend.
///
/// Lookups go to the local [`UserFinder`]. Logins are synthesised on the spot.
/// Every mutation is accepted and leaves the user untouched.
pub struct LocalUserService {
    user_finder: Arc<dyn UserFinder>,
    user_factory: Arc<dyn UserFactory>,
    session_factory: Arc<dyn SessionFactory>,
    null_model: NullModel,
}

impl LocalUserService {
    pub fn new(
        user_finder: Arc<dyn UserFinder>,
        user_factory: Arc<dyn UserFactory>,
        session_factory: Arc<dyn SessionFactory>,
    ) -> LocalUserService {
        LocalUserService {
            user_finder,
            user_factory,
            session_factory,
            null_model: NullModel::new(),
        }
    }

    /// Mutations have nowhere to go locally. The caller gets the user back as is.
    async fn unchanged(&self, user_id: UserId, operation: &'static str) -> Result<User, UserError> {
        debug!(%user_id, operation, "mutation ignored");
        self.find(user_id).await
    }
}

/// A directory entry with no name has never been seen, and counts as missing.
fn seen_user(entry: DirectoryUser, missing: impl FnOnce() -> String) -> Result<User, UserError> {
    if entry.has_history() {
        Ok(User::new(entry))
    } else {
        Err(UserError::NotFound(missing()))
    }
}

#[async_trait::async_trait]
impl UserService for LocalUserService {
    async fn find(&self, user_id: UserId) -> Result<User, UserError> {
        let entry = self
            .user_finder
            .find_user_by_id(user_id)
            .await
            .map_err(|e| UserError::Resolver(e.to_string()))?;

        let user = seen_user(entry, || format!("No user with UUID {}", user_id));
        debug!(%user_id, found = user.is_ok(), "user lookup");
        user
    }

    async fn search(&self, request: UserSearchRequest) -> Result<UserSearchResponse, UserError> {
        let entry = self
            .user_finder
            .find_user_by_name(&request.username)
            .await
            .map_err(|e| UserError::Resolver(e.to_string()))?;

        let user = seen_user(entry, || format!("No user named '{}'", request.username));
        debug!(username = %request.username, found = user.is_ok(), "user search");
        let user = user?;
        Ok(UserSearchResponse {
            online: user.is_online(),
            user,
            disguised: false,
            last_session: None,
            last_server_id: None,
        })
    }

    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, UserError> {
        let entry = self
            .user_factory
            .create_user(request.player_id, &request.username, Utc::now());
        let user = User::new(entry);

        let session = request
            .start_session
            .then(|| self.session_factory.new_session(&user, request.ip));

        debug!(
            user_id = %user.id(),
            username = %request.username,
            session = ?session.as_ref().map(|s| &s.id),
            "local login"
        );

        Ok(LoginResponse {
            user,
            session,
            kick: None,
            message: None,
            route_to_server: None,
            punishment: None,
            whispers: Vec::new(),
            unread_appeal_count: 0,
        })
    }

    async fn logout(&self, _request: LogoutRequest) -> Result<(), UserError> {
        self.null_model.acknowledge("logout")
    }

    async fn credit_raindrops(
        &self,
        user_id: UserId,
        _request: CreditRaindropsRequest,
    ) -> Result<UserUpdateResponse, UserError> {
        let user = self.unchanged(user_id, "credit_raindrops").await?;
        Ok(UserUpdateResponse {
            success: true,
            user,
        })
    }

    async fn purchase_gizmo(
        &self,
        user_id: UserId,
        _request: PurchaseGizmoRequest,
    ) -> Result<User, UserError> {
        self.unchanged(user_id, "purchase_gizmo").await
    }

    async fn update(&self, user_id: UserId, _update: UserUpdate) -> Result<User, UserError> {
        self.unchanged(user_id, "update").await
    }

    async fn change_setting(
        &self,
        user_id: UserId,
        _request: ChangeSettingRequest,
    ) -> Result<User, UserError> {
        self.unchanged(user_id, "change_setting").await
    }

    async fn change_class(
        &self,
        user_id: UserId,
        _request: ChangeClassRequest,
    ) -> Result<User, UserError> {
        self.unchanged(user_id, "change_class").await
    }
}
