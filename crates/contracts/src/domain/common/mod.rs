//! Common types and traits for all resources

pub mod paging;
pub mod resource;
pub mod serde_ext;

// Re-exports
pub use paging::{PageInfo, Paged};
pub use resource::{Endpoints, Resource, UpdateStyle};
