//! Binding the data value into the template context.
//!
//! Every region executes against the same context, built once per render:
//!
//! 1. configured globals,
//! 2. the fields of the data value, when it is a map (shadowing globals),
//! 3. the whole data value under the binding name (shadowing both).
//!
//! So with data `{"location": "Berlin"}` a region may write either
//! `{{ location }}` or `{{ this.location }}`, and with data `"hello"` it writes
//! `{{ this }}`.
//!
//! Globals and fields named like a registered helper are left out, since a
//! context variable would shadow the helper function. They stay reachable
//! through the binding (`{{ this.title }}`).

use serde_json::{Map, Value};

use crate::config::ComposerConfig;
use crate::helpers::HelperRegistry;

/// Builds the context map for one render.
pub fn bind(data: &Value, config: &ComposerConfig, helpers: &HelperRegistry) -> Map<String, Value> {
    let mut context: Map<String, Value> = config
        .globals
        .iter()
        .filter(|(k, _)| !helpers.contains(k))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    if let Value::Object(fields) = data {
        for (key, value) in fields {
            if !helpers.contains(key) {
                context.insert(key.clone(), value.clone());
            }
        }
    }

    context.insert(config.binding.clone(), data.clone());
    context
}
