use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the local override files.
    #[serde(default = "default_working_dir")]
    pub working_dir: PathBuf,

    /// Directory the rendered target files are appended to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Requested output formats: "bind", "unbound", "windows".
    #[serde(default = "default_targets")]
    pub targets: Vec<String>,

    /// The `file` clause of every emitted Bind zone statement.
    #[serde(default = "default_bind_zone_file")]
    pub bind_zone_file: String,

    #[serde(default = "default_added_hosts")]
    pub added_hosts: String,

    #[serde(default = "default_excluded_hosts")]
    pub excluded_hosts: String,

    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    #[serde(default = "default_concurrent_downloads")]
    pub concurrent_downloads: usize,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Defaults
fn default_working_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_targets() -> Vec<String> {
    vec!["unbound".to_string()]
}
fn default_bind_zone_file() -> String {
    "/etc/bind/db.poison".to_string()
}
fn default_added_hosts() -> String {
    "addedHosts.txt".to_string()
}
fn default_excluded_hosts() -> String {
    "excludedHosts.txt".to_string()
}
fn default_fetch_timeout_secs() -> u64 {
    10
}
fn default_concurrent_downloads() -> usize {
    4
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            working_dir: default_working_dir(),
            output_dir: default_output_dir(),
            targets: default_targets(),
            bind_zone_file: default_bind_zone_file(),
            added_hosts: default_added_hosts(),
            excluded_hosts: default_excluded_hosts(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            concurrent_downloads: default_concurrent_downloads(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .await
            .context("Failed to read config file")?;
        let config: Config = toml::from_str(&contents).context("Failed to parse config TOML")?;
        Ok(config)
    }

    pub fn added_hosts_path(&self) -> PathBuf {
        self.working_dir.join(&self.added_hosts)
    }

    pub fn excluded_hosts_path(&self) -> PathBuf {
        self.working_dir.join(&self.excluded_hosts)
    }
}
