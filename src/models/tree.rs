//! Upstream tree and repository DTOs.
//!
//! - `RepositoryReference`: owner/name/branch the relay snapshots
//! - `TreeEntry`: Single object from the recursive Git Trees listing
//! - `TreeResponse`: Body of `GET /repos/{owner}/{repo}/git/trees/{branch}`
//! - `ContentPayload`: Body of `GET /repos/{owner}/{repo}/contents/{path}`

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReference {
    pub owner: String,
    pub name: String,
    pub branch: String,
}

impl RepositoryReference {
    pub fn new(owner: impl Into<String>, name: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            branch: branch.into(),
        }
    }
}

/// Formats as `owner/name`, the form reported in snapshot responses.
impl fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TreeEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(default)]
    pub size: Option<u64>,
}

impl TreeEntry {
    pub fn is_blob(&self) -> bool {
        self.entry_type == EntryType::Blob
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Blob,
    Tree,
    /// Submodule pointer
    Commit,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreeResponse {
    pub tree: Vec<TreeEntry>,
    #[serde(default)]
    pub truncated: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentPayload {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_display() {
        let repo = RepositoryReference::new("VerbaManent", "jemini", "main");
        assert_eq!(repo.to_string(), "VerbaManent/jemini");
    }

    #[test]
    fn test_tree_response_parses_github_shape() {
        let body = r#"{
            "sha": "abc",
            "url": "https://api.github.com/repos/o/r/git/trees/abc",
            "tree": [
                {"path": "src", "mode": "040000", "type": "tree", "sha": "1"},
                {"path": "src/main.js", "mode": "100644", "type": "blob", "sha": "2", "size": 42},
                {"path": "vendor/lib", "mode": "160000", "type": "commit", "sha": "3"}
            ],
            "truncated": false
        }"#;

        let parsed: TreeResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.tree.len(), 3);
        assert_eq!(parsed.tree[0].entry_type, EntryType::Tree);
        assert_eq!(parsed.tree[0].size, None);
        assert!(parsed.tree[1].is_blob());
        assert_eq!(parsed.tree[1].size, Some(42));
        assert_eq!(parsed.tree[2].entry_type, EntryType::Commit);
    }

    #[test]
    fn test_unknown_entry_type_is_tolerated() {
        let entry: TreeEntry =
            serde_json::from_str(r#"{"path": "x", "type": "symlink"}"#).unwrap();
        assert_eq!(entry.entry_type, EntryType::Unknown);
        assert!(!entry.is_blob());
    }
}
