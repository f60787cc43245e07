//! Built-in page sources.
//!
//! Sources are stored as `(source_id, content)` pairs for registration with a
//! [`Composer`](crate::Composer), in the order they must be added.

/// Built-in sources, in registration order.
pub const PAGE_SOURCES: &[(&str, &str)] = &[
    ("layout.html", LAYOUT_SOURCE),
    ("head.html", HEAD_SOURCE),
    ("widget.html", WIDGET_SOURCE),
];

/// Page skeleton.
///
/// Defines `layout` plus empty `head` and `content` placeholders. The layout
/// has no `<head>` of its own; with `head` undefined the document goes straight
/// from `<html>` to `<body>`.
pub const LAYOUT_SOURCE: &str = r#"{%- define "layout" -%}
<!DOCTYPE html>
<html>
{% include "head" ignore missing %}
<body>{% include "content" ignore missing %}</body>
</html>
{%- enddefine %}
{% define "head" %}{% enddefine %}
{% define "content" %}{% enddefine %}
"#;

/// Document head with empty `title` and `styles` placeholders.
pub const HEAD_SOURCE: &str = r#"{%- define "head" -%}
<head>
{% include "title" ignore missing %}
{% include "styles" ignore missing %}
</head>
{%- enddefine %}
{% define "title" %}{% enddefine %}
{% define "styles" %}{% enddefine %}
"#;

/// Widget regions.
///
/// Expects `location`, `description` and `celsius` in the data value. The
/// stylesheet root can be moved with a `static_root` global; it is written
/// into the `href` unescaped.
pub const WIDGET_SOURCE: &str = r#"{%- define "title" -%}
<title>{{ title(location) }} weather</title>
{%- enddefine %}

{%- define "styles" -%}
<link rel="stylesheet" href="{{ concat(static_root | default("/static"), "/widget.css") | safe }}">
{%- enddefine %}

{%- define "content" -%}
<div class="widget">
<h1 class="location">{{ title(location) }}</h1>
<p class="description">{{ description }}</p>
<p class="temperature">{{ celsius }}°C</p>
<div class="gopher">
{%- for item in clothings(description, celsius) %}
<div class="{{ classNames(["clothing", item]) }}"></div>
{%- endfor %}
</div>
</div>
{%- enddefine %}
"#;
