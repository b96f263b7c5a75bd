use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Parameter map passed to indicator calculations.
///
/// A `BTreeMap` keeps serialization order deterministic, which the cache
/// layer relies on when fingerprinting parameter sets.
pub type ParamMap = BTreeMap<String, ParamValue>;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Text(String),
    Flag(bool),
}

impl ParamValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            ParamValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Name of the value's type, used in validation messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Number(_) => "number",
            ParamValue::Text(_) => "enum",
            ParamValue::Flag(_) => "boolean",
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(n) => write!(f, "{}", n),
            ParamValue::Text(s) => write!(f, "{}", s),
            ParamValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Number(v)
    }
}

impl From<usize> for ParamValue {
    fn from(v: usize) -> Self {
        ParamValue::Number(v as f64)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Flag(v)
    }
}

/// Declared kind of a parameter, with its default and constraints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParamKind {
    /// Numeric parameter with an inclusive range.
    Number { default: f64, min: f64, max: f64 },
    /// Enum parameter with a closed option set.
    Choice {
        default: &'static str,
        options: &'static [&'static str],
    },
    /// Boolean parameter.
    Toggle { default: bool },
}

/// Declared parameter: name plus kind. Drives UI generation externally and
/// validation internally.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamSpec {
    pub name: &'static str,
    #[serde(flatten)]
    pub kind: ParamKind,
}

impl ParamSpec {
    /// Numeric parameter spec.
    pub fn number(name: &'static str, default: f64, min: f64, max: f64) -> Self {
        Self {
            name,
            kind: ParamKind::Number { default, min, max },
        }
    }

    /// Enum parameter spec.
    pub fn choice(
        name: &'static str,
        default: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            kind: ParamKind::Choice { default, options },
        }
    }

    /// Boolean parameter spec.
    pub fn toggle(name: &'static str, default: bool) -> Self {
        Self {
            name,
            kind: ParamKind::Toggle { default },
        }
    }

    /// The default value declared by this spec.
    pub fn default_value(&self) -> ParamValue {
        match &self.kind {
            ParamKind::Number { default, .. } => ParamValue::Number(*default),
            ParamKind::Choice { default, .. } => ParamValue::Text((*default).to_string()),
            ParamKind::Toggle { default } => ParamValue::Flag(*default),
        }
    }

    /// Check one supplied value against this spec, pushing any violations
    /// onto `errors`.
    pub fn check(&self, value: &ParamValue, errors: &mut Vec<String>) {
        match (&self.kind, value) {
            (ParamKind::Number { min, max, .. }, ParamValue::Number(n)) => {
                if !n.is_finite() {
                    errors.push(format!("parameter '{}' must be a finite number", self.name));
                } else if n < min || n > max {
                    errors.push(format!(
                        "parameter '{}' must be between {} and {}, got {}",
                        self.name, min, max, n
                    ));
                }
            }
            (ParamKind::Choice { options, .. }, ParamValue::Text(s)) => {
                if !options.contains(&s.as_str()) {
                    errors.push(format!(
                        "parameter '{}' must be one of [{}], got '{}'",
                        self.name,
                        options.join(", "),
                        s
                    ));
                }
            }
            (ParamKind::Toggle { .. }, ParamValue::Flag(_)) => {}
            (kind, value) => {
                let expected = match kind {
                    ParamKind::Number { .. } => "number",
                    ParamKind::Choice { .. } => "enum",
                    ParamKind::Toggle { .. } => "boolean",
                };
                errors.push(format!(
                    "parameter '{}' must be a {}, got {}",
                    self.name,
                    expected,
                    value.type_name()
                ));
            }
        }
    }
}

/// Aggregated outcome of validating a parameter map.
///
/// Validation is advisory: it is reported, never thrown, and `calculate`
/// does not re-validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl Validation {
    /// Build from a collected error list; valid iff the list is empty.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }
}
