//! Layout composition over named regions.
//!
//! This module provides [`Composer`], which holds a table of regions, a copy of
//! the helper registry and a configuration, and renders one named entry region
//! with a single bound data value.
//!
//! # Regions
//!
//! Sources are split into regions with [`add_source`](Composer::add_source);
//! single regions can be supplied with [`define`](Composer::define). Either way
//! the table is keyed by name and the last registration wins, so a caller can
//! load a layout that declares empty `head` and `content` placeholders and later
//! fill them in.
//!
//! ```rust
//! use widget_render::Composer;
//!
//! let mut composer = Composer::new();
//! composer.add_source("layout.html", r#"
//! {%- define "layout" -%}
//! <html><body>{% include "content" ignore missing %}</body></html>
//! {%- enddefine %}
//! {% define "content" %}{% enddefine %}
//! "#).unwrap();
//!
//! assert_eq!(composer.render("layout", &"hi").unwrap(), "<html><body></body></html>");
//!
//! composer.define("content", "<p>{{ this }}</p>").unwrap();
//! assert_eq!(
//!     composer.render("layout", &"hi").unwrap(),
//!     "<html><body><p>hi</p></body></html>",
//! );
//! ```
//!
//! # Render Phases
//!
//! Each render call parses nothing new: sources were split and compiled when
//! they were added. The call then
//!
//! 1. builds a fresh engine environment from the region table and helpers,
//! 2. executes the entry region against the bound data,
//! 3. writes the output to the sink only if execution succeeded.
//!
//! An entry region that was never defined renders as empty output.

use std::io::Write;

use serde::Serialize;

use super::engine::{build_environment, validate_region};
use super::region::{parse_document, Region, RegionTable};
use crate::config::ComposerConfig;
use crate::context::bind;
use crate::error::RenderError;
use crate::helpers::HelperRegistry;

/// Renders named regions with late-bound region lookup.
#[derive(Debug, Clone)]
pub struct Composer {
    regions: RegionTable,
    helpers: HelperRegistry,
    config: ComposerConfig,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Composer {
    /// Creates a composer with a copy of the default helpers.
    pub fn new() -> Self {
        Self::with_helpers(HelperRegistry::defaults().copy())
    }

    /// Creates a composer using the given helper table.
    pub fn with_helpers(helpers: HelperRegistry) -> Self {
        Self {
            regions: RegionTable::new(),
            helpers,
            config: ComposerConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: ComposerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    pub fn helpers(&self) -> &HelperRegistry {
        &self.helpers
    }

    /// Mutable access to this composer's own helper copy.
    pub fn helpers_mut(&mut self) -> &mut HelperRegistry {
        &mut self.helpers
    }

    /// Splits a source document into regions and registers them.
    ///
    /// Nothing is registered if any region in the source fails to parse.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateParse`] carrying `source_id` for
    /// malformed define blocks or template syntax errors.
    pub fn add_source(&mut self, source_id: &str, text: &str) -> Result<(), RenderError> {
        let regions = parse_document(source_id, text)?;
        for region in &regions {
            validate_region(region)?;
        }
        tracing::debug!(source = source_id, regions = regions.len(), "added template source");
        for region in regions {
            self.regions.insert(region);
        }
        Ok(())
    }

    /// Registers a single region body, replacing any earlier definition.
    ///
    /// The region name doubles as the source identifier in parse errors.
    pub fn define(&mut self, name: &str, body: &str) -> Result<(), RenderError> {
        let region = Region {
            name: name.to_string(),
            body: body.to_string(),
            origin: name.to_string(),
        };
        validate_region(&region)?;
        tracing::trace!(region = name, "defined region");
        self.regions.insert(region);
        Ok(())
    }

    /// Removes a region so it renders as empty again.
    pub fn undefine(&mut self, name: &str) -> bool {
        self.regions.remove(name).is_some()
    }

    pub fn has_region(&self, name: &str) -> bool {
        self.regions.contains(name)
    }

    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.regions.names()
    }

    /// Renders `entry` with `data` and returns the output.
    ///
    /// # Errors
    ///
    /// - [`RenderError::Serialization`] if `data` cannot be serialized
    /// - [`RenderError::TemplateExecution`] if a helper fails or a region
    ///   includes an undefined region without `ignore missing`
    pub fn render<T: Serialize + ?Sized>(&self, entry: &str, data: &T) -> Result<String, RenderError> {
        let data = serde_json::to_value(data)?;

        if !self.regions.contains(entry) {
            tracing::debug!(entry, "entry region undefined, rendering empty");
            return Ok(String::new());
        }

        tracing::debug!(entry, regions = self.regions.len(), "rendering region");
        let env = build_environment(&self.config, &self.helpers, &self.regions)?;
        let context = minijinja::Value::from_serialize(bind(&data, &self.config, &self.helpers));

        let result = env
            .get_template(entry)
            .and_then(|template| template.render(context));
        result.map_err(|cause| {
            tracing::debug!(entry, error = %cause, "region execution failed");
            RenderError::TemplateExecution {
                region: cause.name().unwrap_or(entry).to_string(),
                cause,
            }
        })
    }

    /// Renders `entry` into `sink`.
    ///
    /// Output is written only after execution succeeds; a failed render
    /// leaves the sink untouched.
    pub fn render_to<T, W>(&self, entry: &str, data: &T, sink: &mut W) -> Result<(), RenderError>
    where
        T: Serialize + ?Sized,
        W: Write + ?Sized,
    {
        let output = self.render(entry, data)?;
        sink.write_all(output.as_bytes())?;
        Ok(())
    }
}
