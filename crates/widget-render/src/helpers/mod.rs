//! Named helper functions callable from template regions.
//!
//! A [`HelperRegistry`] maps helper names to [`Helper`]s. The built-in table,
//! [`HelperRegistry::defaults`], is created once and never mutated. To change a
//! helper for a render, take a [`copy`](HelperRegistry::copy) and [`set`](HelperRegistry::set)
//! the replacement on the copy:
//!
//! ```rust
//! use serde_json::json;
//! use widget_render::helpers::{Helper, HelperRegistry, Signature};
//!
//! let mut helpers = HelperRegistry::defaults().copy();
//! helpers.set(
//!     "clothings",
//!     Helper::new(Signature::any(), |_args| Ok(json!(["crown", "cape"]))),
//! );
//!
//! let args = [json!("It's spring time"), json!(25)];
//! assert_eq!(helpers.call("clothings", &args).unwrap(), json!(["crown", "cape"]));
//! assert_eq!(
//!     HelperRegistry::defaults().call("clothings", &args).unwrap(),
//!     json!(["tshirt", "sunglasses", "hat"]),
//! );
//! ```
//!
//! ## Default Helpers
//!
//! | Name | Arguments | Result |
//! |------|-----------|--------|
//! | `concat` | strings... | the strings joined with no separator |
//! | `title` | string | each word capitalized |
//! | `classNames` | list of strings | deduplicated, space-joined class attribute |
//! | `clothings` | description, celsius | list of clothing tags |
//!
//! Arguments are checked against each helper's [`Signature`] before it runs, so
//! a template passing `"25"` where an integer is expected fails with a typed
//! [`HelperError`] instead of a silent coercion.

mod signature;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use minijinja::value::Rest;
use minijinja::{Environment, ErrorKind};
use once_cell::sync::Lazy;
use serde_json::Value;

pub use signature::{ArgKind, HelperArgs, Signature};

pub use crate::error::HelperError;
use crate::{class_names, concat, recommend, title};

/// Signature of a helper body.
pub type HelperFn = dyn Fn(HelperArgs<'_>) -> Result<Value, HelperError> + Send + Sync;

static DEFAULT_HELPERS: Lazy<HelperRegistry> = Lazy::new(HelperRegistry::builtin);

/// A helper function together with its declared argument contract.
///
/// Cloning is cheap: the function body is shared.
#[derive(Clone)]
pub struct Helper {
    signature: Signature,
    func: Arc<HelperFn>,
}

impl Helper {
    pub fn new<F>(signature: Signature, func: F) -> Self
    where
        F: Fn(HelperArgs<'_>) -> Result<Value, HelperError> + Send + Sync + 'static,
    {
        Self {
            signature,
            func: Arc::new(func),
        }
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Validates `args` and runs the helper.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, HelperError> {
        self.signature.check(name, args)?;
        (self.func)(HelperArgs::new(name, args))
    }

    /// Whether two handles share the same function body.
    pub fn same_function(&self, other: &Helper) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Helper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Helper")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// Name-keyed table of helpers.
#[derive(Debug, Clone, Default)]
pub struct HelperRegistry {
    helpers: BTreeMap<String, Helper>,
}

impl HelperRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared, read-only default registry.
    pub fn defaults() -> &'static HelperRegistry {
        &DEFAULT_HELPERS
    }

    fn builtin() -> Self {
        let mut registry = Self::new();
        registry.set(
            "concat",
            Helper::new(Signature::variadic(ArgKind::Str), |args| {
                Ok(Value::String(concat(&args.rest_str(0)?)))
            }),
        );
        registry.set(
            "title",
            Helper::new(Signature::new([ArgKind::Str]), |args| {
                Ok(Value::String(title(args.str(0)?)))
            }),
        );
        registry.set(
            "classNames",
            Helper::new(Signature::new([ArgKind::StrList]), |args| {
                Ok(Value::String(class_names(&args.str_list(0)?)))
            }),
        );
        registry.set(
            "clothings",
            Helper::new(Signature::new([ArgKind::Str, ArgKind::Int]), |args| {
                let tags = recommend(args.str(0)?, args.int(1)?);
                Ok(Value::Array(
                    tags.into_iter()
                        .map(|tag| Value::String(tag.as_str().to_string()))
                        .collect(),
                ))
            }),
        );
        registry
    }

    /// A mutable copy sharing function bodies with `self`.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Registers `helper` under `name`, returning any helper it replaced.
    pub fn set(&mut self, name: impl Into<String>, helper: Helper) -> Option<Helper> {
        self.helpers.insert(name.into(), helper)
    }

    pub fn remove(&mut self, name: &str) -> Option<Helper> {
        self.helpers.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Helper> {
        self.helpers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.helpers.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.helpers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }

    /// Calls a helper by name.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, HelperError> {
        self.get(name)
            .ok_or_else(|| HelperError::Unknown(name.to_string()))?
            .call(name, args)
    }

    /// Exposes every helper as a global function of `env`.
    ///
    /// Engine values are converted to JSON on the way in and back on the way
    /// out. A helper failure becomes an engine error whose source is the
    /// [`HelperError`].
    pub(crate) fn install(&self, env: &mut Environment<'static>) {
        for (name, helper) in &self.helpers {
            let helper = helper.clone();
            let helper_name = name.clone();
            env.add_function(
                name.clone(),
                move |args: Rest<minijinja::Value>| -> Result<minijinja::Value, minijinja::Error> {
                    let values = args
                        .iter()
                        .map(serde_json::to_value)
                        .collect::<Result<Vec<_>, _>>()
                        .map_err(|e| {
                            minijinja::Error::new(
                                ErrorKind::BadSerialization,
                                format!("arguments to `{}` are not plain data", helper_name),
                            )
                            .with_source(e)
                        })?;
                    tracing::trace!(helper = %helper_name, argc = values.len(), "calling helper");
                    let result = helper.call(&helper_name, &values).map_err(|e| {
                        minijinja::Error::new(
                            ErrorKind::InvalidOperation,
                            format!("helper `{}` failed", helper_name),
                        )
                        .with_source(e)
                    })?;
                    Ok(minijinja::Value::from_serialize(&result))
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_hold_builtin_names() {
        let names: Vec<_> = HelperRegistry::defaults().names().collect();
        assert_eq!(names, vec!["classNames", "clothings", "concat", "title"]);
    }

    #[test]
    fn test_default_concat() {
        let out = HelperRegistry::defaults()
            .call("concat", &[json!("a"), json!("b"), json!("c")])
            .unwrap();
        assert_eq!(out, json!("abc"));
    }

    #[test]
    fn test_default_title() {
        let out = HelperRegistry::defaults()
            .call("title", &[json!("new york")])
            .unwrap();
        assert_eq!(out, json!("New York"));
    }

    #[test]
    fn test_default_class_names() {
        let out = HelperRegistry::defaults()
            .call("classNames", &[json!(["a", "b", "a"])])
            .unwrap();
        assert_eq!(out, json!("a b"));
    }

    #[test]
    fn test_default_clothings() {
        let out = HelperRegistry::defaults()
            .call("clothings", &[json!("Heavy rain expected"), json!(10)])
            .unwrap();
        assert_eq!(out, json!(["umbrella", "boots", "scarf", "coat"]));
    }

    #[test]
    fn test_default_clothings_rejects_string_celsius() {
        let err = HelperRegistry::defaults()
            .call("clothings", &[json!("rain"), json!("10")])
            .unwrap_err();
        assert!(matches!(err, HelperError::ArgumentType { index: 1, .. }));
    }

    #[test]
    fn test_unknown_helper() {
        let err = HelperRegistry::defaults().call("nope", &[]).unwrap_err();
        assert_eq!(err, HelperError::Unknown("nope".into()));
    }

    #[test]
    fn test_copy_shares_functions() {
        let copy = HelperRegistry::defaults().copy();
        let original = HelperRegistry::defaults().get("title").unwrap();
        assert!(copy.get("title").unwrap().same_function(original));
    }

    #[test]
    fn test_override_does_not_touch_defaults() {
        let mut copy = HelperRegistry::defaults().copy();
        let replaced = copy.set(
            "clothings",
            Helper::new(Signature::any(), |_| Ok(json!(["crown"]))),
        );
        assert!(replaced.is_some());

        let args = [json!("It's spring time"), json!(25)];
        assert_eq!(copy.call("clothings", &args).unwrap(), json!(["crown"]));
        assert_eq!(
            HelperRegistry::defaults().call("clothings", &args).unwrap(),
            json!(["tshirt", "sunglasses", "hat"])
        );
    }

    #[test]
    fn test_remove_from_copy() {
        let mut copy = HelperRegistry::defaults().copy();
        assert!(copy.remove("concat").is_some());
        assert!(!copy.contains("concat"));
        assert!(HelperRegistry::defaults().contains("concat"));
        assert_eq!(copy.len(), HelperRegistry::defaults().len() - 1);
    }

    #[test]
    fn test_install_exposes_helpers_to_templates() {
        let mut env = Environment::new();
        HelperRegistry::defaults().install(&mut env);
        let out = env
            .render_str(
                r#"{{ classNames(["a", "b", "a"]) }}|{{ clothings("rain", 15) | join(",") }}"#,
                (),
            )
            .unwrap();
        assert_eq!(out, "a b|umbrella,coat");
    }
}
