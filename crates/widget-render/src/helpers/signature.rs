//! Declared argument contracts for helpers.

use std::fmt;

use serde_json::Value;

use crate::error::HelperError;

/// The kind of value a helper argument must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// A string.
    Str,
    /// A number representable as `i64`.
    Int,
    /// A list whose items are all strings.
    StrList,
    /// Anything, including null.
    Any,
}

impl ArgKind {
    fn accepts(self, value: &Value) -> bool {
        match self {
            ArgKind::Str => value.is_string(),
            ArgKind::Int => value.as_i64().is_some(),
            ArgKind::StrList => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            ArgKind::Any => true,
        }
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArgKind::Str => "a string",
            ArgKind::Int => "an integer",
            ArgKind::StrList => "a list of strings",
            ArgKind::Any => "any value",
        };
        f.write_str(name)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "an integer",
        Value::Number(_) => "a float",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
}

/// Positional parameters plus an optional variadic tail.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Signature {
    params: Vec<ArgKind>,
    rest: Option<ArgKind>,
}

impl Signature {
    /// A fixed-arity signature.
    pub fn new(params: impl Into<Vec<ArgKind>>) -> Self {
        Self {
            params: params.into(),
            rest: None,
        }
    }

    /// Any number of arguments of one kind.
    pub fn variadic(kind: ArgKind) -> Self {
        Self {
            params: Vec::new(),
            rest: Some(kind),
        }
    }

    /// Accepts every argument list; the helper validates for itself.
    pub fn any() -> Self {
        Self::variadic(ArgKind::Any)
    }

    /// Adds a variadic tail after the positional parameters.
    pub fn with_rest(mut self, kind: ArgKind) -> Self {
        self.rest = Some(kind);
        self
    }

    /// Checks `args` against the declared parameters.
    pub fn check(&self, helper: &str, args: &[Value]) -> Result<(), HelperError> {
        let arity_ok = match self.rest {
            Some(_) => args.len() >= self.params.len(),
            None => args.len() == self.params.len(),
        };
        if !arity_ok {
            let expected = match self.rest {
                Some(_) => format!("at least {}", self.params.len()),
                None => self.params.len().to_string(),
            };
            return Err(HelperError::Arity {
                helper: helper.to_string(),
                expected,
                actual: args.len(),
            });
        }

        for (index, value) in args.iter().enumerate() {
            let kind = match self.params.get(index) {
                Some(kind) => *kind,
                None => self.rest.unwrap_or(ArgKind::Any),
            };
            if !kind.accepts(value) {
                return Err(HelperError::ArgumentType {
                    helper: helper.to_string(),
                    index,
                    expected: kind,
                    actual: kind_of(value),
                });
            }
        }
        Ok(())
    }
}

/// Arguments handed to a helper function, with typed accessors.
#[derive(Debug, Clone, Copy)]
pub struct HelperArgs<'a> {
    helper: &'a str,
    values: &'a [Value],
}

impl<'a> HelperArgs<'a> {
    pub fn new(helper: &'a str, values: &'a [Value]) -> Self {
        Self { helper, values }
    }

    /// Name the helper was invoked under.
    pub fn helper(&self) -> &'a str {
        self.helper
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &'a [Value] {
        self.values
    }

    pub fn get(&self, index: usize) -> Option<&'a Value> {
        self.values.get(index)
    }

    pub fn str(&self, index: usize) -> Result<&'a str, HelperError> {
        self.typed(index, ArgKind::Str, Value::as_str)
    }

    pub fn int(&self, index: usize) -> Result<i64, HelperError> {
        self.typed(index, ArgKind::Int, Value::as_i64)
    }

    pub fn str_list(&self, index: usize) -> Result<Vec<&'a str>, HelperError> {
        self.typed(index, ArgKind::StrList, |value| {
            value
                .as_array()?
                .iter()
                .map(Value::as_str)
                .collect::<Option<Vec<_>>>()
        })
    }

    /// Every argument from `start` on, as strings.
    pub fn rest_str(&self, start: usize) -> Result<Vec<&'a str>, HelperError> {
        (start..self.values.len()).map(|i| self.str(i)).collect()
    }

    fn typed<T>(
        &self,
        index: usize,
        kind: ArgKind,
        extract: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<T, HelperError> {
        let value = self.values.get(index).ok_or_else(|| HelperError::Arity {
            helper: self.helper.to_string(),
            expected: format!("at least {}", index + 1),
            actual: self.values.len(),
        })?;
        extract(value).ok_or_else(|| HelperError::ArgumentType {
            helper: self.helper.to_string(),
            index,
            expected: kind,
            actual: kind_of(value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fixed_arity() {
        let sig = Signature::new([ArgKind::Str, ArgKind::Int]);
        assert!(sig.check("f", &[json!("rain"), json!(3)]).is_ok());

        let err = sig.check("f", &[json!("rain")]).unwrap_err();
        assert_eq!(
            err,
            HelperError::Arity {
                helper: "f".into(),
                expected: "2".into(),
                actual: 1,
            }
        );
    }

    #[test]
    fn test_argument_kind_mismatch() {
        let sig = Signature::new([ArgKind::Str, ArgKind::Int]);
        let err = sig.check("f", &[json!("rain"), json!("25")]).unwrap_err();
        assert_eq!(
            err,
            HelperError::ArgumentType {
                helper: "f".into(),
                index: 1,
                expected: ArgKind::Int,
                actual: "a string",
            }
        );
    }

    #[test]
    fn test_float_is_not_int() {
        let sig = Signature::new([ArgKind::Int]);
        assert!(sig.check("f", &[json!(2.5)]).is_err());
    }

    #[test]
    fn test_variadic() {
        let sig = Signature::variadic(ArgKind::Str);
        assert!(sig.check("concat", &[]).is_ok());
        assert!(sig.check("concat", &[json!("a"), json!("b")]).is_ok());
        assert!(sig.check("concat", &[json!("a"), json!(1)]).is_err());
    }

    #[test]
    fn test_positional_then_rest() {
        let sig = Signature::new([ArgKind::Int]).with_rest(ArgKind::Str);
        assert!(sig.check("f", &[json!(1), json!("x"), json!("y")]).is_ok());
        let err = sig.check("f", &[]).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_str_list_rejects_mixed_items() {
        let sig = Signature::new([ArgKind::StrList]);
        assert!(sig.check("f", &[json!(["a", "b"])]).is_ok());
        assert!(sig.check("f", &[json!(["a", 1])]).is_err());
    }

    #[test]
    fn test_args_accessors() {
        let values = vec![json!("sleet"), json!(-4), json!(["a", "b"])];
        let args = HelperArgs::new("f", &values);
        assert_eq!(args.str(0).unwrap(), "sleet");
        assert_eq!(args.int(1).unwrap(), -4);
        assert_eq!(args.str_list(2).unwrap(), vec!["a", "b"]);
        assert!(args.int(0).is_err());
        assert!(matches!(args.str(5), Err(HelperError::Arity { .. })));
    }
}
