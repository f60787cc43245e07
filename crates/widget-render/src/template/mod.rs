//! Region-based template composition.
//!
//! Templates are organized as named regions. A layout region defines the page
//! skeleton and pulls other regions in by name; a caller fills those regions in
//! before rendering. The substrate is MiniJinja with HTML auto-escaping.
//!
//! ## Defining Regions
//!
//! ```jinja
//! {% define "layout" %}
//! <html>
//! {% include "head" ignore missing %}
//! <body>{% include "content" ignore missing %}</body>
//! </html>
//! {% enddefine %}
//! {% define "head" %}{% enddefine %}
//! {% define "content" %}{% enddefine %}
//! ```
//!
//! `ignore missing` makes a region that was never defined render as nothing.
//! Declaring empty placeholders as above documents which regions a layout
//! expects callers to provide.
//!
//! ## Key Types
//!
//! - [`Composer`]: region table + helpers + config, renders an entry region
//! - [`RegionTable`]: name-keyed region bodies, last registration wins
//! - [`parse_document`]: splits a source document into regions

mod composer;
pub mod engine;
pub mod region;

pub use composer::Composer;
pub use region::{parse_document, Region, RegionTable};
