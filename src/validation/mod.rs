//! # Request Validation
//!
//! Ordered field rules applied to the raw JSON request body.
//!
//! Rules are declared per controller as a chain per field. Every violated
//! rule produces one [`FieldError`], collected in declaration order; a
//! request is never short-circuited at the first failure, so the error array
//! enumerates everything that is wrong with the body at once.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// Syntactic email shape: non-empty local part, one `@`, dotted domain,
/// no whitespace.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static regex: email"));

/// A single violated rule, in the shape returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// The submitted value; JSON null when the field was missing.
    pub value: Value,
    /// Human-readable rule message.
    pub msg: String,
    /// Name of the offending field.
    pub param: String,
    /// Where the field was read from; always "body".
    pub location: String,
}

impl FieldError {
    fn new(param: &str, value: Value, msg: &str) -> Self {
        Self {
            value,
            msg: msg.to_string(),
            param: param.to_string(),
            location: "body".to_string(),
        }
    }
}

/// An ordered set of field rules over one request body.
///
/// Declaration order is response order: the error array preserves exactly
/// the order in which rules were chained.
pub struct RuleSet<'a> {
    body: &'a Value,
    errors: Vec<FieldError>,
}

impl<'a> RuleSet<'a> {
    pub fn new(body: &'a Value) -> Self {
        Self {
            body,
            errors: Vec::new(),
        }
    }

    /// Starts a rule chain for one field.
    pub fn check<'r>(&'r mut self, param: &str) -> FieldCheck<'r, 'a> {
        FieldCheck {
            set: self,
            param: param.to_string(),
            optional: false,
        }
    }

    /// Ok when every rule passed, otherwise all violations in declaration
    /// order.
    pub fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Rule chain for a single field of a [`RuleSet`] body.
pub struct FieldCheck<'r, 'a> {
    set: &'r mut RuleSet<'a>,
    param: String,
    optional: bool,
}

impl FieldCheck<'_, '_> {
    /// Marks the remaining rules in this chain as applying only when the
    /// field is present in the body. Update handlers use this for their
    /// partial-field semantics.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    fn value(&self) -> Option<&Value> {
        self.set.body.get(&self.param)
    }

    fn skipped(&self) -> bool {
        self.optional && self.value().is_none()
    }

    fn fail(&mut self, msg: &str) {
        let value = self.value().cloned().unwrap_or(Value::Null);
        let entry = FieldError::new(&self.param, value, msg);
        self.set.errors.push(entry);
    }

    /// Fails when the field is missing, null, or a string that is empty
    /// after trimming.
    pub fn not_empty(mut self, msg: &str) -> Self {
        if !self.skipped() && is_empty(self.value()) {
            self.fail(msg);
        }
        self
    }

    /// Fails when the value is not a string or its character count falls
    /// outside `[min, max]` inclusive.
    pub fn length_between(mut self, min: usize, max: usize, msg: &str) -> Self {
        if !self.skipped() {
            let ok = match self.value() {
                Some(Value::String(s)) => {
                    let len = s.chars().count();
                    len >= min && len <= max
                }
                _ => false,
            };
            if !ok {
                self.fail(msg);
            }
        }
        self
    }

    /// Fails when the value is not a syntactically valid email address.
    pub fn is_email(mut self, msg: &str) -> Self {
        if !self.skipped() {
            let ok = match self.value() {
                Some(Value::String(s)) => EMAIL_PATTERN.is_match(s),
                _ => false,
            };
            if !ok {
                self.fail(msg);
            }
        }
        self
    }

    /// Fails when a non-empty value is neither a JSON integer nor a string
    /// parsing as one. Emptiness is the province of [`Self::not_empty`], so
    /// an empty field yields no entry from this rule.
    pub fn is_integer(mut self, msg: &str) -> Self {
        if !self.skipped() && !is_empty(self.value()) && coerce_integer(self.value()).is_none() {
            self.fail(msg);
        }
        self
    }
}

fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

fn coerce_integer(value: Option<&Value>) -> Option<i64> {
    match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Reads a body field as a string, stringifying scalar values the way the
/// original service stored whatever the client sent.
pub fn string_field(body: &Value, param: &str) -> String {
    match body.get(param) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Reads a body field as an integer, accepting a JSON integer or an
/// integer string. Callers validate with `is_integer` first.
pub fn integer_field(body: &Value, param: &str) -> Option<i64> {
    coerce_integer(body.get(param))
}
