use crate::application_impl::NullModel;
use crate::application_port::*;
use crate::domain_model::*;
use crate::logger::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Map service for a standalone server. Ratings are discarded. Author lookups
/// go through the user service.
pub struct LocalMapService {
    user_service: Arc<dyn UserService>,
    null_model: NullModel,
}

impl LocalMapService {
    pub fn new(user_service: Arc<dyn UserService>) -> LocalMapService {
        LocalMapService {
            user_service,
            null_model: NullModel::new(),
        }
    }
}

#[async_trait::async_trait]
impl MapService for LocalMapService {
    async fn rate(&self, _rating: MapRating) -> Result<(), MapError> {
        self.null_model.acknowledge("rate")
    }

    async fn get_ratings(
        &self,
        _request: MapRatingsRequest,
    ) -> Result<MapRatingsResponse, MapError> {
        self.null_model.empty_ratings()
    }

    fn update_maps_and_lookup_authors(&self, maps: &[MapDoc]) -> UpdateMapsAndLookupAuthorsResponse {
        let distinct: HashSet<UserId> = maps
            .iter()
            .flat_map(|map| map.author_and_contributor_ids())
            .collect();

        debug!(
            maps = maps.len(),
            authors = distinct.len(),
            "looking up map authors"
        );

        let runtime = Handle::try_current();
        if let Err(e) = &runtime {
            warn!(error = %e, "no async runtime, author lookups not issued");
        }

        let authors: HashMap<UserId, AuthorLookup> = distinct
            .into_iter()
            .map(|user_id| {
                let lookup = match &runtime {
                    Ok(runtime) => {
                        let user_service = self.user_service.clone();
                        AuthorLookup::spawn_on(runtime, async move {
                            user_service.find(user_id).await
                        })
                    }
                    Err(e) => AuthorLookup::settled(Err(UserError::Internal(format!(
                        "author lookup for {user_id} not issued: {e}"
                    )))),
                };
                (user_id, lookup)
            })
            .collect();

        UpdateMapsAndLookupAuthorsResponse {
            maps_result: self.null_model.empty_update(),
            authors,
        }
    }
}
