//! # Widget Render - Server-Side HTML Widget Composition
//!
//! `widget-render` renders a small HTML weather widget from reusable template
//! regions and a handful of template helpers. Loading template files and
//! serving HTTP are left to the caller: this crate takes source text and data
//! and produces HTML.
//!
//! ## Core Concepts
//!
//! - [`Composer`]: named-region table with late-bound lookup; renders an entry
//!   region with one bound data value
//! - [`HelperRegistry`]: helper functions callable from templates, copied per
//!   composer so overrides never touch the shared defaults
//! - [`recommend`]: maps a weather description and temperature to [`ClothingTag`]s
//! - [`class_names`]: deduplicating class attribute joiner
//!
//! ## Quick Start
//!
//! ```rust
//! use widget_render::Composer;
//!
//! let mut composer = Composer::new();
//! composer.add_source("layout.html", r#"
//! {%- define "layout" -%}
//! <html><head>{% include "title" ignore missing %}</head><body>{% include "content" ignore missing %}</body></html>
//! {%- enddefine %}
//! "#).unwrap();
//! composer.define("title", "<title>{{ this.location }}</title>").unwrap();
//! composer.define("content", r#"{{ clothings(this.description, this.celsius) | join(", ") }}"#).unwrap();
//!
//! let html = composer
//!     .render("layout", &serde_json::json!({
//!         "location": "Berlin",
//!         "description": "Heavy rain expected",
//!         "celsius": 10,
//!     }))
//!     .unwrap();
//!
//! assert_eq!(
//!     html,
//!     "<html><head><title>Berlin</title></head><body>umbrella, boots, scarf, coat</body></html>",
//! );
//! ```
//!
//! ## Overriding Helpers
//!
//! ```rust
//! use serde_json::json;
//! use widget_render::{Composer, HelperRegistry};
//! use widget_render::helpers::{Helper, Signature};
//!
//! let mut helpers = HelperRegistry::defaults().copy();
//! helpers.set("clothings", Helper::new(Signature::any(), |_| Ok(json!(["crown", "cape"]))));
//!
//! let mut composer = Composer::with_helpers(helpers);
//! composer.define("content", r#"{{ clothings("sunny", 30) | join(" ") }}"#).unwrap();
//! assert_eq!(composer.render("content", &()).unwrap(), "crown cape");
//! ```
//!
//! The full widget page is available through [`render_widget`].

pub mod assets;
mod classnames;
mod clothing;
pub mod config;
pub mod context;
mod error;
pub mod helpers;
pub mod template;
mod text;
pub mod widget;

pub use assets::widget_composer;
pub use classnames::class_names;
pub use clothing::{recommend, ClothingTag, WeatherInput};
pub use config::ComposerConfig;
pub use error::{HelperError, RenderError, Result};
pub use helpers::HelperRegistry;
pub use template::Composer;
pub use text::{concat, title};
pub use widget::{render_widget, WeatherReport};
