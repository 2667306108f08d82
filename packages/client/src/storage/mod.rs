mod error;
mod traits;

pub mod filesystem;
pub mod memory;

pub use error::StorageError;
pub use filesystem::FileSessionStore;
pub use memory::MemorySessionStore;
pub use traits::{SESSION_KEY, SessionStore};
