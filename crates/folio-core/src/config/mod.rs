use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::content::MalformedPolicy;
use crate::error::{FolioError, Result};

mod env;

/// Looked up in the working directory when no `--config` path is given.
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

const PROJECTS_DIR: &str = "projects";
const CERTIFICATES_DIR: &str = "certificates";
const PROFILE_FILE: &str = "profile.json";
const IMAGES_DIR: &str = "images";

/// Site configuration, built once at startup and passed to every collaborator.
///
/// Sources, later ones winning: defaults, a TOML file, `FOLIO_*` environment
/// variables. The CLI applies its own flags on top.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub server: ServerConfig,
    pub content: ContentConfig,
    pub site: SiteMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Holds `projects/`, `certificates/` and `profile.json`.
    pub data_root: PathBuf,
    /// Holds `images/`, served under `/static/images`.
    pub static_root: PathBuf,
    pub skip_malformed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    pub title: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from("data"),
            static_root: PathBuf::from("static"),
            skip_malformed: false,
        }
    }
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load from `path`, or from `folio.toml` when it exists, then apply the
    /// process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_env(&|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(FolioError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay `FOLIO_*` values read through `lookup`.
    pub fn apply_env(&mut self, lookup: &dyn Fn(&str) -> Option<String>) {
        if let Some(host) = env::read_non_empty(lookup, env::ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = env::read_u16(lookup, env::ENV_PORT) {
            self.server.port = port;
        }
        if let Some(root) = env::read_non_empty(lookup, env::ENV_DATA_ROOT) {
            self.content.data_root = PathBuf::from(root);
        }
        if let Some(root) = env::read_non_empty(lookup, env::ENV_STATIC_ROOT) {
            self.content.static_root = PathBuf::from(root);
        }
        if let Some(skip) = env::parse_bool(lookup(env::ENV_SKIP_MALFORMED).as_deref()) {
            self.content.skip_malformed = skip;
        }
        if let Some(title) = env::read_non_empty(lookup, env::ENV_SITE_TITLE) {
            self.site.title = title;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(FolioError::Config("server.host must not be empty".to_string()));
        }
        if self.content.data_root.as_os_str().is_empty() {
            return Err(FolioError::Config(
                "content.data_root must not be empty".to_string(),
            ));
        }
        if self.content.static_root.as_os_str().is_empty() {
            return Err(FolioError::Config(
                "content.static_root must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn projects_dir(&self) -> PathBuf {
        self.content.data_root.join(PROJECTS_DIR)
    }

    #[must_use]
    pub fn certificates_dir(&self) -> PathBuf {
        self.content.data_root.join(CERTIFICATES_DIR)
    }

    #[must_use]
    pub fn profile_path(&self) -> PathBuf {
        self.content.data_root.join(PROFILE_FILE)
    }

    #[must_use]
    pub fn images_dir(&self) -> PathBuf {
        self.content.static_root.join(IMAGES_DIR)
    }

    #[must_use]
    pub const fn malformed_policy(&self) -> MalformedPolicy {
        MalformedPolicy::from_skip_flag(self.content.skip_malformed)
    }
}
