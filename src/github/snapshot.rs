use chrono::{DateTime, SecondsFormat, Utc};
use tracing::info;

use crate::error::GitHubError;
use crate::github::GitHubApi;
use crate::github::content::load_files;
use crate::github::tree::list_blobs;
use crate::models::{FileRecord, RepositoryReference, SnapshotResponse, TreeEntry};

/// Lists the repository, loads the selected files and assembles the response.
/// Only a listing failure is returned as an error; content failures are
/// recorded per file.
pub async fn fetch_snapshot(
    github: &dyn GitHubApi,
    repo: &RepositoryReference,
    token: &str,
) -> Result<SnapshotResponse, GitHubError> {
    info!(repository = %repo, branch = %repo.branch, "Fetching repository files");

    let blobs = list_blobs(github, repo, token).await?;
    let files = load_files(github, repo, &blobs, token).await;
    let snapshot = assemble(repo, &blobs, files, Utc::now());

    info!(
        repository = %repo,
        total_files = snapshot.total_files,
        loaded_files = snapshot.loaded_files,
        "Repository snapshot ready"
    );

    Ok(snapshot)
}

pub fn assemble(
    repo: &RepositoryReference,
    blobs: &[TreeEntry],
    files: Vec<FileRecord>,
    now: DateTime<Utc>,
) -> SnapshotResponse {
    SnapshotResponse {
        repository: repo.to_string(),
        last_updated: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        total_files: blobs.iter().filter(|e| e.is_blob()).count(),
        loaded_files: files.iter().filter(|f| f.is_loaded()).count(),
        files,
    }
}
