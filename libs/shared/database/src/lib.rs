pub mod json_file;
pub mod memory;
pub mod store;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
pub use store::{load_records, save_records, Collection, RecordStore};
