use crate::application_port::*;
use crate::logger::*;
use futures_util::future::{self, Ready};

/// Shared defaults for service operations that have no local backing store.
///
/// Each local service holds one of these and forwards its no-op operations
/// here, so the "succeed and discard" behaviour lives in one place.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullModel;

impl NullModel {
    pub fn new() -> Self {
        Self
    }

    pub fn acknowledge<E>(&self, operation: &'static str) -> Result<(), E> {
        debug!(operation, "no local backing, request discarded");
        Ok(())
    }

    pub fn empty_ratings<E>(&self) -> Result<MapRatingsResponse, E> {
        debug!("no local ratings, returning empty set");
        Ok(MapRatingsResponse::default())
    }

    pub fn empty_update(&self) -> Ready<Result<UpdateMultiResponse, MapError>> {
        future::ready(Ok(UpdateMultiResponse::EMPTY))
    }
}
