use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::SiteConfig;
use crate::content::{ContentRecord, load_directory};
use crate::error::Result;
use crate::profile::{Profile, load_profile};

/// Read-only view over the configured content tree. Nothing is cached: each
/// call goes back to disk so edits show up on the next request.
#[derive(Debug, Clone)]
pub struct ContentStore {
    config: Arc<SiteConfig>,
}

impl ContentStore {
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn projects(&self) -> Result<Vec<ContentRecord>> {
        load_directory(&self.config.projects_dir(), self.config.malformed_policy())
    }

    pub fn certificates(&self) -> Result<Vec<ContentRecord>> {
        load_directory(
            &self.config.certificates_dir(),
            self.config.malformed_policy(),
        )
    }

    pub fn profile(&self) -> Result<Profile> {
        load_profile(&self.config.profile_path())
    }

    /// Create the content and image directories the site expects. Returns the
    /// directories that did not exist before.
    pub fn ensure_layout(&self) -> Result<Vec<PathBuf>> {
        let images = self.config.images_dir();
        let wanted = [
            self.config.projects_dir(),
            self.config.certificates_dir(),
            images.join("projects"),
            images.join("certificates"),
        ];

        let mut created = Vec::new();
        for dir in wanted {
            if dir.is_dir() {
                continue;
            }
            fs::create_dir_all(&dir)?;
            tracing::info!(dir = %dir.display(), "created content directory");
            created.push(dir);
        }
        Ok(created)
    }
}
