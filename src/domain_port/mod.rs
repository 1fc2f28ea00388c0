mod session_factory;
mod user_factory;
mod user_finder;

pub use session_factory::*;
pub use user_factory::*;
pub use user_finder::*;
