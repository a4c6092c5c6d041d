//! Persistence for the board document
//!
//! The board keeps all of its state (services and status history) in a
//! single document. A [`DocumentBackend`] stores that document somewhere;
//! the [`Store`] layers the board's read-modify-write operations on top.
//!
//! ## Backends
//!
//! - **JSON file** (default): pretty-printed JSON, atomic rename on write
//! - **In-Memory**: no persistence, for testing or throwaway boards
//!
//! ## Usage
//!
//! ```no_run
//! use status_board::storage::{Store, file::JsonFileBackend};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = Store::new(Box::new(JsonFileBackend::new("./data/db.json")));
//!     let document = store.load().await?;
//!     println!("{} services", document.services.len());
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod error;
pub mod file;
pub mod memory;
pub mod schema;
pub mod seed;
pub mod store;

pub use backend::DocumentBackend;
pub use error::{StorageError, StorageResult};
pub use schema::{Document, MAX_HISTORY_PER_SERVICE};
pub use store::Store;
