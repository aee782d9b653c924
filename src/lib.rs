//! Procedural cosmology generation library
//!
//! Builds a seeded, reproducible set of luminaries (celestial bodies) with
//! distances, visibility and colors, plus a small ledger of numbers and a
//! day-indexed event timeline.

pub mod color;
pub mod config;
pub mod cosmology;
pub mod element;
pub mod error;
pub mod generation;
pub mod ledger;
pub mod luminary;
pub mod sampling;
pub mod seeds;
pub mod timeline;

pub use color::{classify, ReferenceColor, Rgb};
pub use config::{GenerationConfig, ALGORITHM_VERSION};
pub use cosmology::Cosmology;
pub use element::{Attributes, Element, Value};
pub use error::{CosmologyError, Result};
pub use ledger::NumberLedger;
pub use luminary::Luminary;
pub use timeline::{DayEntry, Event, Timeline};
