mod map;
mod moderation;
mod session;
mod user;

pub use map::*;
pub use moderation::*;
pub use session::*;
pub use user::*;
