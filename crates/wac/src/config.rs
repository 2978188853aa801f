//! Facade configuration.

use serde::{Deserialize, Serialize};
use wac_codec::ParserConfig;

/// Configuration for an [`AclSession`](crate::AclSession).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WacConfig {
    /// How ACL resources are read and written.
    pub parser: ParserConfig,
    /// Drop rules that grant nothing before writing.
    pub minimize_on_save: bool,
}

impl Default for WacConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            minimize_on_save: true,
        }
    }
}
