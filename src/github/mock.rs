//! In-memory `GitHubApi` for unit and router tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::StatusCode;

use crate::error::GitHubError;
use crate::github::GitHubApi;
use crate::models::{ContentPayload, EntryType, RepositoryReference, TreeEntry};

pub fn blob(path: &str, size: u64) -> TreeEntry {
    TreeEntry {
        path: path.to_string(),
        entry_type: EntryType::Blob,
        size: Some(size),
    }
}

pub fn dir(path: &str) -> TreeEntry {
    TreeEntry {
        path: path.to_string(),
        entry_type: EntryType::Tree,
        size: None,
    }
}

/// Base64 payload wrapped at 60 columns, the way GitHub returns it.
pub fn encoded(text: &str) -> ContentPayload {
    let raw = STANDARD.encode(text.as_bytes());
    let wrapped = raw
        .as_bytes()
        .chunks(60)
        .map(|c| String::from_utf8_lossy(c).into_owned())
        .collect::<Vec<_>>()
        .join("\n");

    ContentPayload {
        content: Some(wrapped),
        encoding: Some("base64".to_string()),
    }
}

#[derive(Default)]
pub struct MockGitHub {
    tree: Vec<TreeEntry>,
    tree_failure: Option<StatusCode>,
    contents: HashMap<String, ContentPayload>,
    content_failures: HashMap<String, StatusCode>,
    pub tree_calls: AtomicUsize,
    pub content_calls: AtomicUsize,
    pub tokens: Mutex<Vec<String>>,
}

impl MockGitHub {
    pub fn new(tree: Vec<TreeEntry>) -> Self {
        Self {
            tree,
            ..Self::default()
        }
    }

    pub fn failing_tree(status: StatusCode) -> Self {
        Self {
            tree_failure: Some(status),
            ..Self::default()
        }
    }

    pub fn with_content(mut self, path: &str, text: &str) -> Self {
        self.contents.insert(path.to_string(), encoded(text));
        self
    }

    pub fn with_payload(mut self, path: &str, payload: ContentPayload) -> Self {
        self.contents.insert(path.to_string(), payload);
        self
    }

    pub fn with_failure(mut self, path: &str, status: StatusCode) -> Self {
        self.content_failures.insert(path.to_string(), status);
        self
    }

    pub fn total_calls(&self) -> usize {
        self.tree_calls.load(Ordering::SeqCst) + self.content_calls.load(Ordering::SeqCst)
    }

    fn record_token(&self, token: &str) {
        if let Ok(mut tokens) = self.tokens.lock() {
            tokens.push(token.to_string());
        }
    }
}

fn status_error(status: StatusCode) -> GitHubError {
    GitHubError::Status {
        status,
        message: status.canonical_reason().unwrap_or("Unknown error").to_string(),
    }
}

#[async_trait]
impl GitHubApi for MockGitHub {
    async fn get_tree(
        &self,
        _repo: &RepositoryReference,
        token: &str,
    ) -> Result<Vec<TreeEntry>, GitHubError> {
        self.tree_calls.fetch_add(1, Ordering::SeqCst);
        self.record_token(token);

        match self.tree_failure {
            Some(status) => Err(status_error(status)),
            None => Ok(self.tree.clone()),
        }
    }

    async fn get_content(
        &self,
        _repo: &RepositoryReference,
        path: &str,
        token: &str,
    ) -> Result<ContentPayload, GitHubError> {
        self.content_calls.fetch_add(1, Ordering::SeqCst);
        self.record_token(token);

        if let Some(status) = self.content_failures.get(path) {
            return Err(status_error(*status));
        }
        self.contents
            .get(path)
            .cloned()
            .ok_or_else(|| status_error(StatusCode::NOT_FOUND))
    }
}
