//! Content loading for the snapshot.
//!
//! Picks the first `MAX_LOADED_FILES` blobs with an allow-listed extension,
//! fetches them concurrently and decodes GitHub's base64 payloads. A failed
//! file becomes a `FileRecord::Failed` in its own slot; siblings are unaffected
//! and output order always matches selection order.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use futures::future::join_all;
use tracing::warn;

use crate::error::GitHubError;
use crate::github::GitHubApi;
use crate::models::{ContentPayload, FileRecord, RepositoryReference, TreeEntry};

pub const ALLOWED_EXTENSIONS: [&str; 4] = [".js", ".json", ".css", ".md"];
pub const MAX_LOADED_FILES: usize = 8;
pub const CONTENT_CHAR_LIMIT: usize = 1500;
pub const TRUNCATION_MARKER: &str = "\n...[truncated]";
pub const READ_ERROR: &str = "Could not read content";

pub fn is_allowed(path: &str) -> bool {
    let lower = path.to_lowercase();
    ALLOWED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// First `MAX_LOADED_FILES` allow-listed blobs, no reordering.
pub fn select_files(blobs: &[TreeEntry]) -> Vec<&TreeEntry> {
    blobs
        .iter()
        .filter(|entry| is_allowed(&entry.path))
        .take(MAX_LOADED_FILES)
        .collect()
}

/// Last path segment.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Text after the last `.`; the whole path when there is none.
pub fn file_type(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}

/// Cuts content to `CONTENT_CHAR_LIMIT` characters and appends the marker.
/// Content at or under the limit is returned untouched.
///
/// Characters are Unicode scalar values, not UTF-16 code units, so text with
/// characters outside the Basic Multilingual Plane (emoji) keeps more of its
/// content than a UTF-16 `length` count would, and a cut never splits a
/// surrogate pair.
pub fn truncate_content(content: String) -> String {
    match content.char_indices().nth(CONTENT_CHAR_LIMIT) {
        Some((cut, _)) => {
            let mut truncated = String::with_capacity(cut + TRUNCATION_MARKER.len());
            truncated.push_str(&content[..cut]);
            truncated.push_str(TRUNCATION_MARKER);
            truncated
        }
        None => content,
    }
}

/// Decodes a contents payload into text. GitHub wraps base64 at 60 columns,
/// so whitespace is stripped first; invalid UTF-8 is replaced, not rejected.
/// Files over 1 MB come back as `encoding: "none"` with empty content and
/// decode to an empty string.
pub fn decode_content(path: &str, payload: &ContentPayload) -> Result<String, GitHubError> {
    let raw = payload
        .content
        .as_deref()
        .ok_or_else(|| GitHubError::MissingContent(path.to_string()))?;
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD.decode(cleaned)?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

async fn fetch_text(
    github: &dyn GitHubApi,
    repo: &RepositoryReference,
    path: &str,
    token: &str,
) -> Result<String, GitHubError> {
    let payload = github.get_content(repo, path, token).await?;
    decode_content(path, &payload)
}

async fn load_file(
    github: &dyn GitHubApi,
    repo: &RepositoryReference,
    entry: &TreeEntry,
    token: &str,
) -> FileRecord {
    match fetch_text(github, repo, &entry.path, token).await {
        Ok(content) => FileRecord::Loaded {
            path: entry.path.clone(),
            name: file_name(&entry.path).to_string(),
            content: truncate_content(content),
            file_type: file_type(&entry.path).to_string(),
            size: entry.size,
        },
        Err(e) => {
            warn!(path = %entry.path, error = %e, "Could not load file content");
            FileRecord::Failed {
                path: entry.path.clone(),
                error: READ_ERROR.to_string(),
            }
        }
    }
}

/// Loads the selected subset of `blobs`. Never fails as a whole.
pub async fn load_files(
    github: &dyn GitHubApi,
    repo: &RepositoryReference,
    blobs: &[TreeEntry],
    token: &str,
) -> Vec<FileRecord> {
    let selected = select_files(blobs);
    join_all(
        selected
            .into_iter()
            .map(|entry| load_file(github, repo, entry, token)),
    )
    .await
}
