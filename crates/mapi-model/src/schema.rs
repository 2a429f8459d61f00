//! Declarative field rules.
//!
//! Schemas are plain `const` data: a list of [`Field`]s, each with a [`Rule`].
//! Rules nest (lists of objects of rules), which covers every payload shape
//! the merchant API accepts.

use serde_json::{Map, Value};

use crate::error::{Violation, ViolationKind};

/// Constraint on a single JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// A string, optionally length-bounded (in characters).
    Str {
        /// Minimum length.
        min_len: Option<usize>,
        /// Maximum length.
        max_len: Option<usize>,
    },
    /// A string equal to one of the listed values.
    OneOf(&'static [&'static str]),
    /// A boolean.
    Bool,
    /// An integer within an inclusive range.
    Int {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
    /// Any JSON number.
    Number,
    /// A list whose every element satisfies the inner rule.
    ListOf(&'static Rule),
    /// A list with arbitrary elements.
    AnyList,
    /// An object with the given fields (undeclared keys rejected).
    Object(&'static [Field]),
    /// `null`, or a value satisfying the inner rule.
    Nullable(&'static Rule),
}

impl Rule {
    /// An unbounded string.
    pub const STRING: Self = Self::Str {
        min_len: None,
        max_len: None,
    };
}

/// A named field within an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// JSON key.
    pub name: &'static str,
    /// Whether the key must be present with a non-null value.
    pub required: bool,
    /// Constraint on the value.
    pub rule: Rule,
}

impl Field {
    /// A required field.
    #[must_use]
    pub const fn required(name: &'static str, rule: Rule) -> Self {
        Self {
            name,
            required: true,
            rule,
        }
    }

    /// An optional field.
    #[must_use]
    pub const fn optional(name: &'static str, rule: Rule) -> Self {
        Self {
            name,
            required: false,
            rule,
        }
    }
}

/// The top-level fields accepted by one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// Declared fields.
    pub fields: &'static [Field],
}

impl Schema {
    /// Check a payload object, returning every violation found.
    ///
    /// Optional fields set to `null` are treated as absent.
    #[must_use]
    pub fn check(&self, payload: &Value) -> Vec<Violation> {
        let mut violations = Vec::new();
        match payload.as_object() {
            Some(object) => check_object(self.fields, object, "", &mut violations),
            None => violations.push(Violation {
                path: String::new(),
                kind: ViolationKind::WrongType("object"),
            }),
        }
        violations
    }
}

fn check_object(
    fields: &[Field],
    object: &Map<String, Value>,
    prefix: &str,
    violations: &mut Vec<Violation>,
) {
    for field in fields {
        let path = join_path(prefix, field.name);
        match object.get(field.name) {
            None | Some(Value::Null) if field.required => violations.push(Violation {
                path,
                kind: ViolationKind::Missing,
            }),
            None | Some(Value::Null) => {}
            Some(value) => check_value(&field.rule, value, &path, violations),
        }
    }

    for key in object.keys() {
        if !fields.iter().any(|field| field.name == key) {
            violations.push(Violation {
                path: join_path(prefix, key),
                kind: ViolationKind::Unexpected,
            });
        }
    }
}

fn check_value(rule: &Rule, value: &Value, path: &str, violations: &mut Vec<Violation>) {
    let kind = match (rule, value) {
        (Rule::Nullable(_), Value::Null) => return,
        (Rule::Nullable(inner), _) => return check_value(inner, value, path, violations),
        (Rule::Str { min_len, max_len }, Value::String(s)) => {
            let len = s.chars().count();
            match (*min_len, *max_len) {
                (Some(min), _) if len < min => ViolationKind::TooShort(min),
                (_, Some(max)) if len > max => ViolationKind::TooLong(max),
                _ => return,
            }
        }
        (Rule::Str { .. }, _) => ViolationKind::WrongType("string"),
        (Rule::OneOf(allowed), Value::String(s)) if allowed.contains(&s.as_str()) => return,
        (Rule::OneOf(allowed), _) => ViolationKind::NotOneOf(*allowed),
        (Rule::Bool, Value::Bool(_)) => return,
        (Rule::Bool, _) => ViolationKind::WrongType("boolean"),
        (Rule::Int { min, max }, Value::Number(n)) if n.is_i64() || n.is_u64() => {
            if n.as_i64().is_some_and(|v| (*min..=*max).contains(&v)) {
                return;
            }
            ViolationKind::OutOfRange {
                min: *min,
                max: *max,
            }
        }
        (Rule::Int { .. }, _) => ViolationKind::WrongType("integer"),
        (Rule::Number, Value::Number(_)) | (Rule::AnyList, Value::Array(_)) => return,
        (Rule::Number, _) => ViolationKind::WrongType("number"),
        (Rule::ListOf(inner), Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                check_value(inner, item, &format!("{path}[{i}]"), violations);
            }
            return;
        }
        (Rule::AnyList | Rule::ListOf(_), _) => ViolationKind::WrongType("list"),
        (Rule::Object(fields), Value::Object(object)) => {
            return check_object(fields, object, path, violations);
        }
        (Rule::Object(_), _) => ViolationKind::WrongType("object"),
    };
    violations.push(Violation {
        path: path.to_owned(),
        kind,
    });
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}.{name}")
    }
}
