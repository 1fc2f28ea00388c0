mod local_map_service;
mod local_user_service;
mod null_model;

#[cfg(test)]
pub(crate) mod test_support;

pub use local_map_service::*;
pub use local_user_service::*;
pub use null_model::*;
