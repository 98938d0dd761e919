//! Command catalog loading.
//!
//! # Design
//! - The catalog is display-only: a bad descriptor file must never stop the
//!   menu from rendering, so loading falls back to the embedded catalog.
//! - Validation rejects entries that would render as blank menu lines.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::defaults::{EMBEDDED_CATALOG, EMBEDDED_SOURCE};
use crate::error::{ConfigError, ConfigResult};
use crate::model::CommandDescriptor;

/// Ordered list of command descriptors shown by the interactive menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCatalog {
    commands: Vec<CommandDescriptor>,
}

impl CommandCatalog {
    /// Parse the catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded JSON is malformed or fails validation.
    pub fn embedded() -> ConfigResult<Self> {
        Self::parse(EMBEDDED_CATALOG, Path::new(EMBEDDED_SOURCE))
    }

    /// Read and parse a descriptor file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a JSON array of
    /// descriptors, is empty, or contains an entry without a name.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw, path)
    }

    /// Load `path` when given, falling back to the embedded catalog when the
    /// file cannot be used. The failure is logged, not returned.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded catalog itself is unusable.
    pub fn load_or_embedded(path: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = path {
            match Self::from_path(path) {
                Ok(catalog) => {
                    debug!(path = %path.display(), commands = catalog.len(), "loaded command catalog");
                    return Ok(catalog);
                }
                Err(err) => {
                    error!(error = %err, detail = ?err, "falling back to embedded command catalog");
                }
            }
        }
        Self::embedded()
    }

    /// Descriptors in menu order.
    #[must_use]
    pub fn commands(&self) -> &[CommandDescriptor] {
        &self.commands
    }

    /// Number of descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the catalog has no descriptors. Always `false` for a loaded catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn parse(raw: &str, origin: &Path) -> ConfigResult<Self> {
        let commands: Vec<CommandDescriptor> =
            serde_json::from_str(raw).map_err(|source| ConfigError::Json {
                path: PathBuf::from(origin),
                source,
            })?;
        if commands.is_empty() {
            return Err(ConfigError::Empty {
                path: PathBuf::from(origin),
            });
        }
        if let Some(index) = commands
            .iter()
            .position(|command| command.name.trim().is_empty())
        {
            return Err(ConfigError::InvalidEntry {
                index,
                reason: "name must not be empty",
            });
        }
        Ok(Self { commands })
    }
}
