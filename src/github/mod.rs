//! GitHub access and the repository snapshot pipeline.
//!
//! - `client`: `GitHubClient`, the reqwest-backed `GitHubApi`
//! - `tree`: Recursive listing filtered to blobs
//! - `content`: Concurrent loading, decoding and truncation of selected files
//! - `snapshot`: Assembles the final `SnapshotResponse`

pub mod client;
pub mod content;
pub mod snapshot;
pub mod tree;

#[cfg(test)]
pub(crate) mod mock;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::GitHubError;
use crate::models::{ContentPayload, RepositoryReference, TreeEntry};

pub use client::GitHubClient;
pub use snapshot::fetch_snapshot;

/// The two upstream calls the relay makes. Every call carries the caller's token.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Recursive tree of `repo.branch`, in upstream order.
    async fn get_tree(
        &self,
        repo: &RepositoryReference,
        token: &str,
    ) -> Result<Vec<TreeEntry>, GitHubError>;

    async fn get_content(
        &self,
        repo: &RepositoryReference,
        path: &str,
        token: &str,
    ) -> Result<ContentPayload, GitHubError>;
}

pub type SharedGitHub = Arc<dyn GitHubApi>;
