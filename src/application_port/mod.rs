mod map_service;
mod user_service;

pub use map_service::*;
pub use user_service::*;
