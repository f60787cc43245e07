//! Region documents and the name-keyed region table.
//!
//! A source document declares regions with define blocks:
//!
//! ```text
//! {% define "layout" %}<html>{% include "content" ignore missing %}</html>{% enddefine %}
//! {% define "content" %}{% enddefine %}
//! ```
//!
//! `-` on the tags trims whitespace the way Jinja does: `-%}` on the opening tag
//! trims the start of the body, `{%-` on the closing tag trims its end. Text
//! outside every define block becomes a region named after the source, unless
//! it is only whitespace.
//!
//! Define blocks do not nest. Region bodies are ordinary Jinja and are compiled
//! separately, so the splitter only needs to find the define tags, stepping over
//! comments and `{% raw %}` blocks where such tags are just text.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::RenderError;

/// Define tags, plus the comments and raw blocks that may hide tag-like text.
static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?s)(?P<comment>\{#.*?#\})",
        r"|(?P<raw>\{%-?\s*raw\s*-?%\}.*?\{%-?\s*endraw\s*-?%\})",
        r#"|\{%(?P<open_l>-?)\s*define\s+"(?P<name>[^"]*)"\s*(?P<open_r>-?)%\}"#,
        r"|\{%(?P<close_l>-?)\s*enddefine\s*(?P<close_r>-?)%\}",
    ))
    .expect("region token pattern is valid")
});

/// A region body and the source that defined it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub name: String,
    pub body: String,
    pub origin: String,
}

/// Splits a source document into its regions, in declaration order.
///
/// Define tags inside `{# ... #}` comments and `{% raw %}` blocks are left
/// alone and stay part of whatever text surrounds them.
pub fn parse_document(source_id: &str, text: &str) -> Result<Vec<Region>, RenderError> {
    let mut regions = Vec::new();
    let mut outside = String::new();
    let mut outside_from = 0;
    // (name, body start, trim start of body)
    let mut open: Option<(String, usize, bool)> = None;

    for caps in TOKEN.captures_iter(text) {
        if caps.name("comment").is_some() || caps.name("raw").is_some() {
            continue;
        }
        let Some(tag) = caps.get(0) else { continue };

        if let Some(name) = caps.name("name") {
            if let Some((outer, ..)) = &open {
                return Err(RenderError::parse(
                    source_id,
                    format!("define block nested inside `{}`", outer),
                ));
            }
            if name.as_str().is_empty() {
                return Err(RenderError::parse(source_id, "define block has an empty region name"));
            }
            outside.push_str(&text[outside_from..tag.start()]);
            let trim_start = caps.name("open_r").is_some_and(|m| m.as_str() == "-");
            open = Some((name.as_str().to_string(), tag.end(), trim_start));
            continue;
        }

        let Some((name, body_start, trim_start)) = open.take() else {
            return Err(RenderError::parse(source_id, "`enddefine` without a matching define"));
        };
        let mut body = &text[body_start..tag.start()];
        if trim_start {
            body = body.trim_start();
        }
        if caps.name("close_l").is_some_and(|m| m.as_str() == "-") {
            body = body.trim_end();
        }
        regions.push(Region {
            name,
            body: body.to_string(),
            origin: source_id.to_string(),
        });
        outside_from = tag.end();
    }

    if let Some((name, ..)) = open {
        return Err(RenderError::parse(
            source_id,
            format!("define block `{}` is never closed", name),
        ));
    }
    outside.push_str(&text[outside_from..]);

    if !outside.trim().is_empty() {
        regions.insert(
            0,
            Region {
                name: source_id.to_string(),
                body: outside,
                origin: source_id.to_string(),
            },
        );
    }
    Ok(regions)
}

/// Name → region. Registering a name again replaces the earlier body.
#[derive(Debug, Clone, Default)]
pub struct RegionTable {
    regions: BTreeMap<String, Region>,
}

impl RegionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a region, returning the one it replaced.
    pub fn insert(&mut self, region: Region) -> Option<Region> {
        self.regions.insert(region.name.clone(), region)
    }

    pub fn get(&self, name: &str) -> Option<&Region> {
        self.regions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.regions.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Region> {
        self.regions.remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
