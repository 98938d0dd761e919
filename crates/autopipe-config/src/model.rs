//! Descriptor types for the command catalog.

use serde::{Deserialize, Serialize};

/// Display metadata for a single command. Informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommandDescriptor {
    /// Command name as typed in one-shot mode.
    pub name: String,
    /// One-line summary.
    #[serde(default)]
    pub description: String,
    /// Parameter hint shown next to the description.
    #[serde(default)]
    pub parameter: String,
}
