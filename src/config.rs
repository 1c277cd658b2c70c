//! Optional TOML configuration.
//!
//! ```toml
//! link_base = "https://github.com/"
//! mode = "linkify"
//! ```

use crate::error::{LinkerError, LinkerResult};
use crate::link::{LinkBuilder, DEFAULT_LINK_BASE};
use crate::rewrite::{RewriteMode, RewriteService};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Prefix for generated links
    pub link_base: String,

    /// Rewrite mode used when none is given on the command line
    pub mode: RewriteMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            link_base: DEFAULT_LINK_BASE.to_string(),
            mode: RewriteMode::default(),
        }
    }
}

impl Config {
    /// Loads the config at `config_path`, or `Ok(None)` if there is no file.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> LinkerResult<Option<Self>> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file");
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| LinkerError::Io {
            path: config_path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&content).map_err(|reason| LinkerError::Config {
            path: config_path.to_path_buf(),
            reason,
        })?;

        debug!(path = %config_path.display(), mode = %config.mode, "loaded config");
        Ok(Some(config))
    }

    fn parse(content: &str) -> Result<Self, String> {
        let config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
        config.link_builder().map_err(|e| e.to_string())?;
        Ok(config)
    }

    /// Link builder for the configured base.
    pub fn link_builder(&self) -> LinkerResult<LinkBuilder> {
        LinkBuilder::with_base(self.link_base.clone())
    }

    /// Rewrite service for `mode`, falling back to the configured mode.
    pub fn rewrite_service(&self, mode: Option<RewriteMode>) -> LinkerResult<RewriteService> {
        Ok(RewriteService::for_mode(
            mode.unwrap_or(self.mode),
            self.link_builder()?,
        ))
    }
}
