//! Process configuration, read once at startup.
//!
//! Every option can come from a flag or its environment variable. Handlers only
//! ever see the resulting `Config`, never the environment.

use std::time::Duration;

use clap::Parser;

use crate::models::RepositoryReference;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = "Render-API";

/// GitHub snapshot relay for plugin hosts
#[derive(Debug, Clone, Parser)]
#[command(name = "plugin-relay")]
#[command(about = "Relays a GitHub repository snapshot to plugin hosts", long_about = None)]
pub struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Token used for every GitHub API call
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Owner of the snapshotted repository
    #[arg(long, env = "GITHUB_OWNER", default_value = "VerbaManent")]
    pub owner: String,

    /// Name of the snapshotted repository
    #[arg(long, env = "GITHUB_REPO", default_value = "jemini")]
    pub repo: String,

    /// Branch to list
    #[arg(long, env = "GITHUB_BRANCH", default_value = "main")]
    pub branch: String,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout for outbound calls, in seconds
    #[arg(long, env = "GITHUB_TIMEOUT_SECS", default_value = "30")]
    pub timeout_secs: u64,

    /// User-Agent sent to GitHub
    #[arg(long, env = "GITHUB_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub github_token: Option<String>,
    pub repository: RepositoryReference,
    pub api_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The token, if one was configured and is non-empty.
    pub fn token(&self) -> Option<&str> {
        self.github_token.as_deref().filter(|t| !t.is_empty())
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            host: cli.host,
            port: cli.port,
            github_token: cli.github_token,
            repository: RepositoryReference::new(cli.owner, cli.repo, cli.branch),
            api_url: cli.api_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(cli.timeout_secs),
            user_agent: cli.user_agent,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            github_token: None,
            repository: RepositoryReference::new("VerbaManent", "jemini", "main"),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
