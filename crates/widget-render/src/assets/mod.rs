//! Built-in widget page sources.
//!
//! Three sources make up the page:
//!
//! - [`LAYOUT_SOURCE`] defines `layout` with empty `head` and `content` placeholders
//! - [`HEAD_SOURCE`] defines `head` with empty `title` and `styles` placeholders
//! - [`WIDGET_SOURCE`] fills in `title`, `styles` and `content`
//!
//! [`widget_composer`] registers them in that order, so the widget's
//! definitions replace the placeholders. Callers can still override any region
//! afterwards with [`Composer::define`].

mod templates;

pub use templates::{HEAD_SOURCE, LAYOUT_SOURCE, PAGE_SOURCES, WIDGET_SOURCE};

use crate::error::RenderError;
use crate::helpers::HelperRegistry;
use crate::template::Composer;

/// A composer loaded with the built-in page sources.
///
/// `helpers` is copied; the caller's registry is not modified.
pub fn widget_composer(helpers: &HelperRegistry) -> Result<Composer, RenderError> {
    let mut composer = Composer::with_helpers(helpers.copy());
    for (source_id, text) in PAGE_SOURCES {
        composer.add_source(source_id, text)?;
    }
    Ok(composer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ComposerConfig;
    use serde_json::json;

    fn report() -> serde_json::Value {
        json!({"location": "berlin", "description": "Sunny", "celsius": 25})
    }

    #[test]
    fn test_sources_parse() {
        let composer = widget_composer(HelperRegistry::defaults()).unwrap();
        for name in ["layout", "head", "content", "title", "styles"] {
            assert!(composer.has_region(name), "missing region {}", name);
        }
    }

    #[test]
    fn test_layout_declares_placeholders() {
        let mut composer = Composer::new();
        composer.add_source("layout.html", LAYOUT_SOURCE).unwrap();
        assert!(composer.has_region("layout"));
        assert!(composer.has_region("head"));
        assert!(composer.has_region("content"));
        assert!(!composer.has_region("layout.html"));
    }

    #[test]
    fn test_head_declares_placeholders() {
        let mut composer = Composer::new();
        composer.add_source("head.html", HEAD_SOURCE).unwrap();
        assert!(composer.has_region("head"));
        assert!(composer.has_region("title"));
        assert!(composer.has_region("styles"));
    }

    #[test]
    fn test_stylesheet_href_is_not_escaped() {
        let composer = widget_composer(HelperRegistry::defaults()).unwrap();
        let styles = composer.render("styles", &report()).unwrap();
        assert_eq!(styles, r#"<link rel="stylesheet" href="/static/widget.css">"#);
    }

    #[test]
    fn test_static_root_global_moves_stylesheet() {
        let config =
            ComposerConfig::default().with_global("static_root", json!("https://cdn.example.com/w"));
        let mut composer = Composer::new().with_config(config);
        for (source_id, text) in PAGE_SOURCES {
            composer.add_source(source_id, text).unwrap();
        }
        let html = composer.render("layout", &report()).unwrap();
        assert!(html.contains(r#"href="https://cdn.example.com/w/widget.css""#));
    }
}
