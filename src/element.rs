//! Named-attribute entities.
//!
//! `Element` is an open bag of named values. Specialized entities such as
//! [`Luminary`](crate::luminary::Luminary) keep a fixed set of typed fields and
//! fall back to an `Element` for everything else; both expose the same
//! key-based interface through the [`Attributes`] trait.

use std::fmt;
use std::ops::Index;
use serde::{Serialize, Deserialize};
use crate::color::Rgb;
use crate::error::{CosmologyError, Result};

/// A single attribute value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Rgb(Rgb),
}

impl Value {
    /// Short kind name used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::Rgb(_) => "rgb",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_rgb(&self) -> Option<Rgb> {
        match self {
            Value::Rgb(rgb) => Some(*rgb),
            _ => None,
        }
    }
}

/// Strings are quoted, everything else prints bare.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "'{}'", s),
            Value::Int(i) => write!(f, "{}", i),
            // Debug keeps the trailing ".0" on whole numbers
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Rgb(rgb) => write!(f, "{}", rgb),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Rgb> for Value {
    fn from(rgb: Rgb) -> Self {
        Value::Rgb(rgb)
    }
}

/// Key-based access shared by every entity kind.
pub trait Attributes {
    /// Entity kind, used as the display prefix (e.g. "Luminary").
    fn kind(&self) -> &str;

    /// Read an attribute by name.
    fn get(&self, key: &str) -> Result<Value>;

    /// Create or overwrite an attribute by name.
    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    /// All attributes in display order (before `name` is hoisted to the front).
    fn attributes(&self) -> Vec<(String, Value)>;
}

/// Write `Kind(name='..', key=value, ...)`, hoisting an attribute called `name`.
pub fn write_attributes(
    f: &mut fmt::Formatter<'_>,
    kind: &str,
    attributes: &[(String, Value)],
) -> fmt::Result {
    let named = attributes.iter().filter(|(k, _)| k == "name");
    let rest = attributes.iter().filter(|(k, _)| k != "name");

    write!(f, "{}(", kind)?;
    for (i, (key, value)) in named.chain(rest).enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}={}", key, value)?;
    }
    f.write_str(")")
}

/// An open bag of named attributes.
///
/// Names are unique; insertion order is kept so display output is stable.
/// There is no removal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    kind: String,
    attributes: Vec<(String, Value)>,
}

impl Element {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attributes: Vec::new(),
        }
    }

    /// Build an element from initial attributes. Later duplicates overwrite earlier ones.
    pub fn from_attributes<K, V, I>(kind: impl Into<String>, attributes: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut element = Self::new(kind);
        for (key, value) in attributes {
            element.insert(key, value);
        }
        element
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or overwrite. Never fails on an open bag.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// Borrow an attribute without cloning.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.attributes.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    fn missing(&self, key: &str) -> CosmologyError {
        CosmologyError::UnknownAttribute {
            kind: self.kind.clone(),
            key: key.to_string(),
        }
    }
}

impl Attributes for Element {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn get(&self, key: &str) -> Result<Value> {
        self.value(key).cloned().ok_or_else(|| self.missing(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.insert(key, value);
        Ok(())
    }

    fn attributes(&self) -> Vec<(String, Value)> {
        self.attributes.clone()
    }
}

/// Bracket access. Panics on a missing key, like `HashMap`'s `Index`;
/// use [`Attributes::get`] for a fallible lookup.
impl Index<&str> for Element {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self.value(key) {
            Some(value) => value,
            None => panic!("{}", self.missing(key)),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_attributes(f, &self.kind, &self.attributes)
    }
}
