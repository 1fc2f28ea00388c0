use crate::domain_model::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct MapId(pub String);

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub user_id: UserId,
    pub contribution: Option<String>,
}

impl Contributor {
    pub fn new(user_id: UserId) -> Self {
        Contributor {
            user_id,
            contribution: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapDoc {
    pub id: MapId,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub authors: Vec<Contributor>,
    #[serde(default)]
    pub contributors: Vec<Contributor>,
}

impl MapDoc {
    /// Authors first, then contributors. Duplicates are kept.
    pub fn author_and_contributor_ids(&self) -> impl Iterator<Item = UserId> + '_ {
        self.authors
            .iter()
            .chain(self.contributors.iter())
            .map(|c| c.user_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapRating {
    pub player_id: UserId,
    pub map_id: MapId,
    pub map_version: String,
    pub score: i32,
    pub comment: Option<String>,
}
