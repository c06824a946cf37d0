//! Layered settings: built-in defaults, then an optional TOML/YAML file,
//! then `LEXIS_*` environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CLIENT_TIMEOUT_SECS, DEFAULT_HOST, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT,
    DEFAULT_SERVICE_URL, WORDS_RESOURCE, WORDS_URL, default_data_dir,
};

/// Base name of the optional settings file looked up in the working
/// directory (`lexis.toml`, `lexis.yaml`, ...).
pub const DEFAULT_CONFIG_NAME: &str = "lexis";

/// Environment prefix; nested keys use `__`, e.g. `LEXIS_SERVER__PORT`.
pub const ENV_PREFIX: &str = "LEXIS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

/// A downloadable data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSpec {
    pub name: String,
    pub url: String,
    /// File name inside the data directory.
    pub file: String,
    /// Lower-case hex SHA-256 the download must match, when set.
    #[serde(default)]
    pub sha256: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSettings {
    pub data_dir: PathBuf,
    pub catalog: Vec<ResourceSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    pub url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub resources: ResourceSettings,
    pub client: ClientSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            },
            resources: ResourceSettings {
                data_dir: default_data_dir(),
                catalog: vec![ResourceSpec {
                    name: WORDS_RESOURCE.to_string(),
                    url: WORDS_URL.to_string(),
                    file: "words_alpha.txt".to_string(),
                    sha256: None,
                }],
            },
            client: ClientSettings {
                url: DEFAULT_SERVICE_URL.to_string(),
                timeout_secs: DEFAULT_CLIENT_TIMEOUT_SECS,
            },
        }
    }
}

/// Command-line values that win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub data_dir: Option<PathBuf>,
    pub url: Option<String>,
}

impl Settings {
    /// Load settings. An explicit `file` must exist; otherwise
    /// `lexis.{toml,yaml}` is read if present.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        Self::build(file, env)
    }

    fn build(file: Option<&Path>, env: Environment) -> Result<Self> {
        let defaults = Config::try_from(&Settings::default())
            .context("failed to encode default settings")?;
        let file = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };
        Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(env)
            .build()
            .context("failed to load settings")?
            .try_deserialize()
            .context("invalid settings")
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(dir) = overrides.data_dir {
            self.resources.data_dir = dir;
        }
        if let Some(url) = overrides.url {
            self.client.url = url;
        }
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
