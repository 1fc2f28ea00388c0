mod session_factory_local;
mod user_directory_memory;

pub use session_factory_local::*;
pub use user_directory_memory::*;
