//! Mirror token persistence
//!
//! Tokens live in a `KeyValueStore`, the same shape as browser local
//! storage. `SqliteStorage` is the persistent backend; `MemoryStorage`
//! backs tests and throwaway sessions.

mod memory;
mod sqlite;
mod store;
mod traits;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;
pub use store::{MirrorToken, MirrorTokenStore, TokenError, STORAGE_KEY};
pub use traits::{KeyValueStore, OpenStore, StorageError, StorageResult};
