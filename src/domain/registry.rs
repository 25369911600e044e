//! In-memory event registry

use std::slice::Iter;

use tracing::{Level, event};

use crate::domain::{constant::registry, event::Event};

/// Ordered, append-only collection of the events created during this run
#[derive(Debug, Default)]
pub struct EventRegistry {
    events: Vec<Event>
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event to the end of the registry
    pub fn append(&mut self, new_event: Event) {
        event!(
            Level::INFO,
            event = registry::EVENT_REGISTERED,
            id = new_event.id(),
            kind = %new_event.kind(),
            total = self.events.len() + 1
        );
        self.events.push(new_event);
    }

    /// All events in insertion order
    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> Iter<'_, Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<'a> IntoIterator for &'a EventRegistry {
    type IntoIter = Iter<'a, Event>;
    type Item = &'a Event;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
