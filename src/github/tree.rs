use tracing::debug;

use crate::error::GitHubError;
use crate::github::GitHubApi;
use crate::models::{RepositoryReference, TreeEntry};

/// Lists every blob on `repo.branch`, in upstream order. Directories and
/// submodule pointers are dropped.
pub async fn list_blobs(
    github: &dyn GitHubApi,
    repo: &RepositoryReference,
    token: &str,
) -> Result<Vec<TreeEntry>, GitHubError> {
    let entries = github.get_tree(repo, token).await?;
    let total = entries.len();

    let blobs: Vec<TreeEntry> = entries.into_iter().filter(TreeEntry::is_blob).collect();
    debug!(repository = %repo, total, blobs = blobs.len(), "Listed repository tree");

    Ok(blobs)
}
