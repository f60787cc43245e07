//! MiniJinja environment construction.
//!
//! An [`Environment`] is built for each render from the composer's regions,
//! helpers and configuration. Regions become named templates, so
//! `{% include "content" ignore missing %}` resolves against whatever body is
//! registered under `content` at the moment of the render.

use minijinja::{AutoEscape, Environment, UndefinedBehavior};

use super::region::{Region, RegionTable};
use crate::config::ComposerConfig;
use crate::error::RenderError;
use crate::helpers::HelperRegistry;

/// Creates an environment with configuration and helpers applied, but no regions.
pub fn base_environment(config: &ComposerConfig, helpers: &HelperRegistry) -> Environment<'static> {
    let mut env = Environment::new();

    let escape = if config.auto_escape {
        AutoEscape::Html
    } else {
        AutoEscape::None
    };
    env.set_auto_escape_callback(move |_name| escape.clone());
    env.set_trim_blocks(config.trim_blocks);
    env.set_lstrip_blocks(config.lstrip_blocks);
    env.set_undefined_behavior(if config.strict_undefined {
        UndefinedBehavior::Strict
    } else {
        UndefinedBehavior::Lenient
    });

    helpers.install(&mut env);
    env
}

/// Compiles a single region, reporting syntax errors against its origin.
pub fn compile_region(env: &mut Environment<'static>, region: &Region) -> Result<(), RenderError> {
    tracing::trace!(region = %region.name, origin = %region.origin, "compiling region");
    env.add_template_owned(region.name.clone(), region.body.clone())
        .map_err(|e| RenderError::syntax(region.origin.clone(), e))
}

/// Builds the full environment for one render.
pub fn build_environment(
    config: &ComposerConfig,
    helpers: &HelperRegistry,
    regions: &RegionTable,
) -> Result<Environment<'static>, RenderError> {
    let mut env = base_environment(config, helpers);
    for region in regions.iter() {
        compile_region(&mut env, region)?;
    }
    Ok(env)
}

/// Checks that a region body compiles, without keeping the result.
pub fn validate_region(region: &Region) -> Result<(), RenderError> {
    let mut env = Environment::new();
    compile_region(&mut env, region)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(name: &str, body: &str) -> Region {
        Region {
            name: name.into(),
            body: body.into(),
            origin: format!("{}.html", name),
        }
    }

    #[test]
    fn test_regions_become_named_templates() {
        let mut table = RegionTable::new();
        table.insert(region("outer", r#"[{% include "inner" %}]"#));
        table.insert(region("inner", "{{ this }}"));
        let env = build_environment(&ComposerConfig::default(), HelperRegistry::defaults(), &table)
            .unwrap();
        let out = env
            .get_template("outer")
            .unwrap()
            .render(minijinja::context! { this => "x" })
            .unwrap();
        assert_eq!(out, "[x]");
    }

    #[test]
    fn test_auto_escape_follows_config() {
        let mut table = RegionTable::new();
        table.insert(region("r", "{{ this }}"));

        let env = build_environment(&ComposerConfig::default(), &HelperRegistry::new(), &table)
            .unwrap();
        let escaped = env
            .get_template("r")
            .unwrap()
            .render(minijinja::context! { this => "<b>" })
            .unwrap();
        assert_eq!(escaped, "&lt;b&gt;");

        let raw_config = ComposerConfig {
            auto_escape: false,
            ..ComposerConfig::default()
        };
        let env = build_environment(&raw_config, &HelperRegistry::new(), &table).unwrap();
        let raw = env
            .get_template("r")
            .unwrap()
            .render(minijinja::context! { this => "<b>" })
            .unwrap();
        assert_eq!(raw, "<b>");
    }

    #[test]
    fn test_syntax_error_names_origin() {
        let err = validate_region(&region("broken", "{{ unclosed")).unwrap_err();
        match err {
            RenderError::TemplateParse { source_id, cause, .. } => {
                assert_eq!(source_id, "broken.html");
                assert!(cause.is_some());
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_undefined() {
        let mut table = RegionTable::new();
        table.insert(region("r", "{{ missing }}"));
        let config = ComposerConfig {
            strict_undefined: true,
            ..ComposerConfig::default()
        };
        let env = build_environment(&config, &HelperRegistry::new(), &table).unwrap();
        assert!(env.get_template("r").unwrap().render(()).is_err());
    }
}
