//! Data transfer objects (DTOs) for upstream calls and API responses.
//!
//! - `tree`: RepositoryReference, TreeEntry, TreeResponse, ContentPayload
//! - `snapshot`: FileRecord, SnapshotResponse, HealthResponse

pub mod snapshot;
pub mod tree;

pub use snapshot::*;
pub use tree::*;
