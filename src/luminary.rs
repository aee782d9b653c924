//! Luminaries: the celestial bodies of a cosmology.

use std::fmt;
use std::ops::Index;
use serde::Serialize;
use crate::color::{classify, Rgb};
use crate::element::{write_attributes, Attributes, Element, Value};
use crate::error::{CosmologyError, Result};

pub const DISTANCE: &str = "distance";
pub const VISIBLE: &str = "visible";
pub const RGB: &str = "rgb";
pub const COLOR: &str = "color";

/// A celestial body.
///
/// The four named fields have fixed value kinds. `color` is derived from `rgb`
/// when the luminary is built and is never a constructor argument. Fields are
/// not re-derived after later writes: overwriting `rgb` or `distance` leaves
/// `color` and `visible` as they were.
///
/// Typed fields and open keys live in one [`Element`], so typed accessors,
/// [`Attributes`] and bracket access all see the same values.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Luminary {
    base: Element,
}

impl Luminary {
    pub fn new(distance: f64, visible: bool, rgb: Rgb) -> Self {
        let base = Element::new("Luminary")
            .with(DISTANCE, distance)
            .with(VISIBLE, visible)
            .with(RGB, rgb)
            .with(COLOR, classify(rgb));
        Self { base }
    }

    // Typed keys are written once in `new` and only replaced by values of
    // the same kind, so the fallbacks below are unreachable.

    /// Distance from the central body in AU.
    pub fn distance(&self) -> f64 {
        self.base.value(DISTANCE).and_then(Value::as_float).unwrap_or_default()
    }

    pub fn visible(&self) -> bool {
        self.base.value(VISIBLE).and_then(Value::as_bool).unwrap_or_default()
    }

    pub fn rgb(&self) -> Rgb {
        self.base.value(RGB).and_then(Value::as_rgb).unwrap_or_default()
    }

    pub fn color(&self) -> &str {
        self.base.value(COLOR).and_then(Value::as_str).unwrap_or_default()
    }

    pub fn set_distance(&mut self, distance: f64) {
        self.base.insert(DISTANCE, distance);
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.base.insert(VISIBLE, visible);
    }

    pub fn set_rgb(&mut self, rgb: Rgb) {
        self.base.insert(RGB, rgb);
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.base.insert(COLOR, color.into());
    }

    /// The underlying attribute store, typed fields included.
    pub fn element(&self) -> &Element {
        &self.base
    }
}

fn expected_kind(key: &str) -> Option<&'static str> {
    match key {
        DISTANCE => Some("float"),
        VISIBLE => Some("boolean"),
        RGB => Some("rgb"),
        COLOR => Some("string"),
        _ => None,
    }
}

impl Attributes for Luminary {
    fn kind(&self) -> &str {
        self.base.kind()
    }

    fn get(&self, key: &str) -> Result<Value> {
        self.base.get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        match expected_kind(key) {
            Some(expected) if expected != value.kind_name() => Err(CosmologyError::AttributeType {
                key: key.to_string(),
                expected,
                found: value.kind_name(),
            }),
            _ => self.base.set(key, value),
        }
    }

    fn attributes(&self) -> Vec<(String, Value)> {
        self.base.attributes()
    }
}

/// Bracket access over typed and open keys alike. Panics on a missing key,
/// like [`Element`]'s `Index`.
impl Index<&str> for Luminary {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        &self.base[key]
    }
}

impl fmt::Display for Luminary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_attributes(f, self.kind(), &self.attributes())
    }
}
