//! Composer configuration.
//!
//! [`ComposerConfig`] controls how region bodies are compiled and how the data
//! value is bound. Every field has a default, so a YAML document only needs the
//! keys it changes:
//!
//! ```rust
//! use widget_render::ComposerConfig;
//!
//! let config = ComposerConfig::from_yaml(r#"
//! trim_blocks: true
//! globals:
//!   site: Weather Gopher
//! "#).unwrap();
//!
//! assert!(config.trim_blocks);
//! assert!(config.auto_escape);
//! assert_eq!(config.binding, "this");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Name the data value is bound under unless configured otherwise.
pub const DEFAULT_BINDING: &str = "this";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// HTML-escape printed values.
    pub auto_escape: bool,
    /// Drop the first newline after a block tag.
    pub trim_blocks: bool,
    /// Strip leading whitespace before a block tag on its line.
    pub lstrip_blocks: bool,
    /// Fail on undefined variables instead of printing nothing.
    pub strict_undefined: bool,
    /// Variable name the whole data value is bound to.
    pub binding: String,
    /// Extra values visible to every region.
    ///
    /// Fields of the data value shadow globals of the same name.
    pub globals: BTreeMap<String, serde_json::Value>,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            auto_escape: true,
            trim_blocks: false,
            lstrip_blocks: false,
            strict_undefined: false,
            binding: DEFAULT_BINDING.to_string(),
            globals: BTreeMap::new(),
        }
    }
}

impl ComposerConfig {
    /// Parses a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, RenderError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn with_global(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.globals.insert(name.into(), value);
        self
    }
}
