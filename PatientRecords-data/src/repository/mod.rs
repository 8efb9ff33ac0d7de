// Repository module structure
pub mod errors;
mod in_memory;
mod json_file;
mod record_store;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;
pub use record_store::{RecordStore, SharedRecordStore};

// Mock store for downstream tests when the mock feature is enabled
#[cfg(feature = "mock")]
pub use record_store::MockRecordStore;
