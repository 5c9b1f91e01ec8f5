pub mod config;
pub mod email;
pub mod storage;
pub mod testing;

pub use email::{EmailError, EmailSender};
pub use storage::{BlobStore, StorageError};
