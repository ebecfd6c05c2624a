//! Declarative payload validation.
//!
//! A schema is a fixed list of required fields, each with a primitive kind.
//! Validation is structural only: every field must be present and coercible
//! to its kind. All failures are collected into a per-field message map that
//! is returned to the client as-is.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

pub const MISSING_FIELD: &str = "Missing data for required field.";
pub const NULL_FIELD: &str = "Field may not be null.";
pub const INVALID_STRING: &str = "Not a valid string.";
pub const INVALID_INTEGER: &str = "Not a valid integer.";
pub const INVALID_DATE: &str = "Not a valid date.";
pub const INVALID_INPUT: &str = "Invalid input type.";

/// Key used for errors that concern the payload as a whole.
pub const SCHEMA_KEY: &str = "_schema";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Date,
}

#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn string(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::String,
        }
    }

    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Integer,
        }
    }

    pub const fn date(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Date,
        }
    }
}

pub type Schema = &'static [Field];

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Date(NaiveDate),
}

/// Field name to error messages. Serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// An error about the payload as a whole rather than one field.
    pub fn schema(message: impl Into<String>) -> Self {
        Self::single(SCHEMA_KEY, message)
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{}: {}", field, messages.join(" "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// The successfully coerced fields of one payload.
#[derive(Debug, Default)]
pub struct ValidatedFields(BTreeMap<&'static str, FieldValue>);

impl ValidatedFields {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn take_string(&mut self, name: &str) -> Result<String, ValidationErrors> {
        match self.0.remove(name) {
            Some(FieldValue::String(value)) => Ok(value),
            Some(_) => Err(ValidationErrors::single(name, INVALID_STRING)),
            None => Err(ValidationErrors::single(name, MISSING_FIELD)),
        }
    }

    pub fn take_integer(&mut self, name: &str) -> Result<i64, ValidationErrors> {
        match self.0.remove(name) {
            Some(FieldValue::Integer(value)) => Ok(value),
            Some(_) => Err(ValidationErrors::single(name, INVALID_INTEGER)),
            None => Err(ValidationErrors::single(name, MISSING_FIELD)),
        }
    }

    pub fn take_date(&mut self, name: &str) -> Result<NaiveDate, ValidationErrors> {
        match self.0.remove(name) {
            Some(FieldValue::Date(value)) => Ok(value),
            Some(_) => Err(ValidationErrors::single(name, INVALID_DATE)),
            None => Err(ValidationErrors::single(name, MISSING_FIELD)),
        }
    }
}

/// Check `payload` against `schema`.
///
/// Nothing is returned unless every field validates. Fields not named in the
/// schema are ignored.
pub fn validate(payload: &Value, schema: Schema) -> Result<ValidatedFields, ValidationErrors> {
    let object: &Map<String, Value> = payload
        .as_object()
        .ok_or_else(|| ValidationErrors::schema(INVALID_INPUT))?;

    let mut fields = ValidatedFields::default();
    let mut errors = ValidationErrors::new();

    for field in schema {
        match object.get(field.name) {
            None => errors.add(field.name, MISSING_FIELD),
            Some(Value::Null) => errors.add(field.name, NULL_FIELD),
            Some(raw) => match coerce(raw, field.kind) {
                Ok(value) => {
                    fields.0.insert(field.name, value);
                }
                Err(message) => errors.add(field.name, message),
            },
        }
    }

    if errors.is_empty() {
        Ok(fields)
    } else {
        Err(errors)
    }
}

fn coerce(raw: &Value, kind: FieldKind) -> Result<FieldValue, &'static str> {
    match kind {
        FieldKind::String => match raw {
            Value::String(s) => Ok(FieldValue::String(s.clone())),
            _ => Err(INVALID_STRING),
        },
        FieldKind::Integer => coerce_integer(raw)
            .map(FieldValue::Integer)
            .ok_or(INVALID_INTEGER),
        FieldKind::Date => match raw {
            Value::String(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map(FieldValue::Date)
                .map_err(|_| INVALID_DATE),
            _ => Err(INVALID_DATE),
        },
    }
}

fn coerce_integer(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?;
            // Integral floats such as 30.0 are accepted.
            (f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64).then_some(f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
