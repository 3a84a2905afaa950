//! GitHub repository snapshot relay for plugin hosts.
//!
//! Serves `GET /plugin-files`: the blob listing of one configured repository
//! plus the decoded, truncated content of up to eight source/doc files, with
//! permissive CORS so a browser-hosted plugin can call it directly.

pub mod config;
pub mod cors;
pub mod error;
pub mod github;
pub mod models;
pub mod routes;
