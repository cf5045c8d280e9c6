// Service exports
pub mod profiles;
pub mod store;

pub use profiles::{ProfileService, ProfileError, ProfileSource, ResolvedProfile};
pub use store::{ProfileRepository, MemoryProfileRepository, FileProfileRepository, StorageError};
