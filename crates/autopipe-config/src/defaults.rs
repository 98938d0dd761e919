//! Built-in catalog shipped with the binary.

/// Catalog used when no descriptor file is configured or the file is unusable.
pub const EMBEDDED_CATALOG: &str = include_str!("../commands.json");

/// Label attached to errors raised while parsing [`EMBEDDED_CATALOG`].
pub const EMBEDDED_SOURCE: &str = "<embedded>";
