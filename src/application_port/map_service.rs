use crate::application_port::UserError;
use crate::domain_model::*;
use futures_util::future::Ready;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error(transparent)]
    User(#[from] UserError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapRatingsRequest {
    pub map_id: MapId,
    pub map_version: String,
    pub player_ids: Vec<UserId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MapRatingsResponse {
    pub player_ratings: HashMap<UserId, i32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UpdateMultiResponse {
    pub created: u32,
    pub updated: u32,
    pub failed: u32,
}

impl UpdateMultiResponse {
    pub const EMPTY: UpdateMultiResponse = UpdateMultiResponse {
        created: 0,
        updated: 0,
        failed: 0,
    };
}

/// A user lookup that has already been issued and may still be running.
///
/// Awaiting it yields the lookup's own result. The task keeps running if
/// this handle is dropped. A lookup that could not be issued is created
/// already settled.
#[derive(Debug)]
pub struct AuthorLookup {
    state: LookupState,
}

#[derive(Debug)]
enum LookupState {
    Running(JoinHandle<Result<User, UserError>>),
    Settled(Option<Result<User, UserError>>),
}

impl AuthorLookup {
    /// Starts `lookup` on `runtime`.
    pub fn spawn_on<F>(runtime: &Handle, lookup: F) -> Self
    where
        F: Future<Output = Result<User, UserError>> + Send + 'static,
    {
        AuthorLookup {
            state: LookupState::Running(runtime.spawn(lookup)),
        }
    }

    pub fn settled(result: Result<User, UserError>) -> Self {
        AuthorLookup {
            state: LookupState::Settled(Some(result)),
        }
    }

    pub fn is_finished(&self) -> bool {
        match &self.state {
            LookupState::Running(handle) => handle.is_finished(),
            LookupState::Settled(_) => true,
        }
    }
}

impl Future for AuthorLookup {
    type Output = Result<User, UserError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.state {
            LookupState::Running(handle) => Pin::new(handle).poll(cx).map(|joined| match joined {
                Ok(result) => result,
                Err(e) => Err(UserError::Internal(format!("author lookup task failed: {e}"))),
            }),
            LookupState::Settled(result) => Poll::Ready(result.take().unwrap_or_else(|| {
                Err(UserError::Internal("author lookup polled after completion".to_string()))
            })),
        }
    }
}

#[derive(Debug)]
pub struct UpdateMapsAndLookupAuthorsResponse {
    pub maps_result: Ready<Result<UpdateMultiResponse, MapError>>,
    /// One pending lookup per distinct author or contributor in the batch.
    pub authors: HashMap<UserId, AuthorLookup>,
}

#[async_trait::async_trait]
pub trait MapService: Send + Sync {
    async fn rate(&self, rating: MapRating) -> Result<(), MapError>;
    async fn get_ratings(&self, request: MapRatingsRequest)
    -> Result<MapRatingsResponse, MapError>;

    /// Returns as soon as every lookup is issued. Without a current tokio
    /// runtime nothing can be issued, and every lookup settles as an error.
    fn update_maps_and_lookup_authors(&self, maps: &[MapDoc]) -> UpdateMapsAndLookupAuthorsResponse;
}
