pub mod app;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod progress;
pub mod state;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::router;
pub use clock::{Clock, FixedClock, LocalClock};
pub use config::Config;
pub use state::AppState;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::ProgressStore;
