//! Response DTOs served to the plugin host.
//!
//! - `FileRecord`: Loaded file (content + metadata) or per-file failure marker
//! - `SnapshotResponse`: Body of GET /plugin-files
//! - `HealthResponse`: Body of GET /

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FileRecord {
    Loaded {
        path: String,
        name: String,
        content: String,
        #[serde(rename = "type")]
        file_type: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        size: Option<u64>,
    },
    Failed {
        path: String,
        error: String,
    },
}

impl FileRecord {
    pub fn path(&self) -> &str {
        match self {
            FileRecord::Loaded { path, .. } | FileRecord::Failed { path, .. } => path,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, FileRecord::Loaded { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotResponse {
    pub repository: String,
    pub last_updated: String,
    pub total_files: usize,
    pub loaded_files: usize,
    pub files: Vec<FileRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub message: String,
    pub endpoints: Vec<String>,
    pub timestamp: String,
}
