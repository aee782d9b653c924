//! Day-indexed timeline of events.
//!
//! Each day owns one slot. A slot is empty until events are attached to it;
//! attaching replaces whatever the slot held before.

use std::fmt;
use tracing::debug;
use crate::element::{Attributes, Element, Value};
use crate::error::{CosmologyError, Result};

/// An opaque timeline record: an [`Element`] whose `name` prints first.
#[derive(Clone, Debug, PartialEq)]
pub struct Event(Element);

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        let name: String = name.into();
        Self(Element::new("Event").with("name", name))
    }

    /// Builder-style attribute.
    pub fn with(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self(self.0.with(key, value))
    }

    pub fn name(&self) -> &str {
        self.0.value("name").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn element(&self) -> &Element {
        &self.0
    }
}

impl Attributes for Event {
    fn kind(&self) -> &str {
        self.0.kind()
    }

    fn get(&self, key: &str) -> Result<Value> {
        self.0.get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.0.set(key, value)
    }

    fn attributes(&self) -> Vec<(String, Value)> {
        self.0.attributes()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// What may be attached to a day: one event or a sequence of them.
///
/// Anything else is rejected at compile time by the `Into<DayEntry>` bound on
/// [`Timeline::attach`].
#[derive(Clone, Debug, PartialEq)]
pub enum DayEntry {
    Single(Event),
    Many(Vec<Event>),
}

impl DayEntry {
    fn into_events(self) -> Vec<Event> {
        match self {
            DayEntry::Single(event) => vec![event],
            DayEntry::Many(events) => events,
        }
    }
}

impl From<Event> for DayEntry {
    fn from(event: Event) -> Self {
        DayEntry::Single(event)
    }
}

impl From<Vec<Event>> for DayEntry {
    fn from(events: Vec<Event>) -> Self {
        DayEntry::Many(events)
    }
}

/// Converts the current day into a stylized date.
pub type DateFormat = Box<dyn Fn(usize) -> String>;

fn default_format(day: usize) -> String {
    format!("{} days have elapsed.", day)
}

/// A series of days and the events recorded on them.
///
/// Day 0 exists from the start; [`Timeline::progress`] appends one empty slot
/// per day advanced.
pub struct Timeline {
    day: usize,
    events: Vec<Option<Vec<Event>>>,
    format: Option<DateFormat>,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            day: 0,
            events: vec![None],
            format: None,
        }
    }

    /// Current day.
    pub fn day(&self) -> usize {
        self.day
    }

    /// Current day, stylized by the active date format.
    pub fn date(&self) -> String {
        match &self.format {
            Some(format) => format(self.day),
            None => default_format(self.day),
        }
    }

    /// Replace the date format. `None` restores the default.
    pub fn set_format(&mut self, format: Option<DateFormat>) {
        self.format = format;
    }

    /// Move forward by `days`, appending an empty slot for each.
    pub fn progress(&mut self, days: usize) {
        for _ in 0..days {
            self.day += 1;
            self.events.push(None);
        }
    }

    /// Move forward by a single day.
    pub fn advance(&mut self) {
        self.progress(1);
    }

    /// Events recorded on `day`, or `None` if nothing was attached or the day
    /// has not been reached.
    pub fn get(&self, day: usize) -> Option<&[Event]> {
        self.events.get(day)?.as_deref()
    }

    /// Replace the slot for `day` with one event or a sequence of events.
    pub fn attach(&mut self, day: usize, entry: impl Into<DayEntry>) -> Result<()> {
        let last = self.day;
        let slot = self
            .events
            .get_mut(day)
            .ok_or(CosmologyError::DayOutOfRange { day, last })?;

        let events = entry.into().into_events();
        debug!(day, count = events.len(), "attached events");
        *slot = Some(events);
        Ok(())
    }

    /// Every day slot in order, including empty ones.
    pub fn slots(&self) -> impl Iterator<Item = (usize, Option<&[Event]>)> {
        self.events
            .iter()
            .enumerate()
            .map(|(day, slot)| (day, slot.as_deref()))
    }

    /// Number of days with at least one attached event.
    pub fn eventful_days(&self) -> usize {
        self.events.iter().filter(|slot| slot.is_some()).count()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timeline")
            .field("day", &self.day)
            .field("events", &self.events)
            .field("custom_format", &self.format.is_some())
            .finish()
    }
}
