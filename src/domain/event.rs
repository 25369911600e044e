//! Conference event types
//!
//! An [`Event`] is a shared record (id, name, capacity) plus a variant payload
//! in [`EventDetails`]. Events are only created through an [`EventFactory`],
//! which validates the capacity and hands out ids in creation order.

use std::fmt::{self, Display};

use tracing::{Level, event};

use crate::domain::{
    constant::{defaults, registry},
    error::{CapacityError, EventError}
};

/// Width of the label column in the detailed view
const LABEL_WIDTH: usize = 10;

/// The kind of a registered event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Workshop,
    Seminar
}

impl EventKind {
    /// Type tag used in the summary and detailed views
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Workshop => "Workshop",
            EventKind::Seminar => "Seminar"
        }
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Variant-specific fields of an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDetails {
    Workshop { topic: String, company: String },
    Seminar { speaker: String }
}

/// A registered conference event. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id:       u32,
    name:     String,
    capacity: u32,
    details:  EventDetails
}

impl Event {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn details(&self) -> &EventDetails {
        &self.details
    }

    pub fn kind(&self) -> EventKind {
        match self.details {
            EventDetails::Workshop { .. } => EventKind::Workshop,
            EventDetails::Seminar { .. } => EventKind::Seminar
        }
    }

    /// One-line rendering of the event.
    ///
    /// ```text
    /// Workshop [1] AI Day | Topic: ML | Company: Acme | Capacity: 50
    /// Seminar  [2] Intro | Speaker: Dr. X | Capacity: 30
    /// ```
    pub fn summary(&self) -> String {
        match &self.details {
            EventDetails::Workshop { topic, company } => format!(
                "Workshop [{}] {} | Topic: {} | Company: {} | Capacity: {}",
                self.id, self.name, topic, company, self.capacity
            ),
            EventDetails::Seminar { speaker } => {
                format!("Seminar  [{}] {} | Speaker: {} | Capacity: {}", self.id, self.name, speaker, self.capacity)
            }
        }
    }

    /// Labeled multi-line rendering. In non-verbose mode this is the summary line alone.
    pub fn detail(&self, verbose: bool) -> Vec<String> {
        if !verbose {
            return vec![self.summary()];
        }

        let mut lines = vec![
            labeled("Type:", self.kind().label()),
            labeled("ID:", self.id),
            labeled("Name:", &self.name),
        ];

        match &self.details {
            EventDetails::Workshop { topic, company } => {
                lines.push(labeled("Topic:", topic));
                lines.push(labeled("Company:", company));
            }
            EventDetails::Seminar { speaker } => lines.push(labeled("Speaker:", speaker))
        }

        lines.push(labeled("Capacity:", self.capacity));
        lines
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

fn labeled(label: &str, value: impl Display) -> String {
    format!("{label:<width$}{value}", width = LABEL_WIDTH)
}

/// Trimmed value, or `default` when the input is blank
fn normalize(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() { default.to_string() } else { trimmed.to_string() }
}

/// Creates events and owns the id sequence.
///
/// Ids start at 1 (unless configured otherwise) and increase by one for every
/// successful construction, regardless of the event kind. A rejected capacity
/// does not consume an id. Once `u32::MAX` has been handed out the sequence is
/// exhausted and further constructions fail.
#[derive(Debug, Clone)]
pub struct EventFactory {
    next_id: Option<u32>
}

impl Default for EventFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EventFactory {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first_id: u32) -> Self {
        Self { next_id: Some(first_id) }
    }

    /// The id the next successful construction will receive, `None` once exhausted
    pub fn peek_next_id(&self) -> Option<u32> {
        self.next_id
    }

    /// Create a workshop. Blank topic becomes `General`, blank company `Unknown`.
    pub fn workshop(&mut self, name: &str, capacity: i32, topic: &str, company: &str) -> Result<Event, EventError> {
        let details =
            EventDetails::Workshop { topic: normalize(topic, defaults::TOPIC), company: normalize(company, defaults::COMPANY) };
        self.create(name, capacity, details)
    }

    /// Create a seminar. Blank speaker becomes `TBD`.
    pub fn seminar(&mut self, name: &str, capacity: i32, speaker: &str) -> Result<Event, EventError> {
        let details = EventDetails::Seminar { speaker: normalize(speaker, defaults::SPEAKER) };
        self.create(name, capacity, details)
    }

    fn create(&mut self, name: &str, capacity: i32, details: EventDetails) -> Result<Event, EventError> {
        let capacity = u32::try_from(capacity).map_err(|_| {
            event!(Level::WARN, event = registry::CAPACITY_REJECTED, capacity);
            CapacityError::Negative
        })?;

        let id = self.next_id.ok_or(EventError::IdsExhausted)?;
        self.next_id = id.checked_add(1);

        Ok(Event { id, name: normalize(name, defaults::NAME), capacity, details })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workshop_summary() {
        let mut factory = EventFactory::new();
        let workshop = factory.workshop("AI Day", 50, "ML", "Acme").unwrap();

        assert_eq!(workshop.summary(), "Workshop [1] AI Day | Topic: ML | Company: Acme | Capacity: 50");
        assert_eq!(workshop.to_string(), workshop.summary());
        assert_eq!(workshop.kind(), EventKind::Workshop);
    }

    #[test]
    fn test_seminar_summary() {
        let mut factory = EventFactory::starting_at(2);
        let seminar = factory.seminar("Intro", 30, "Dr. X").unwrap();

        assert_eq!(seminar.summary(), "Seminar  [2] Intro | Speaker: Dr. X | Capacity: 30");
        assert_eq!(seminar.kind(), EventKind::Seminar);
    }

    #[test]
    fn test_negative_capacity_rejected() {
        let mut factory = EventFactory::new();

        assert_eq!(factory.workshop("Late", -1, "x", "y"), Err(EventError::Capacity(CapacityError::Negative)));
        assert_eq!(factory.seminar("Later", i32::MIN, "z"), Err(EventError::Capacity(CapacityError::Negative)));
        assert_eq!(factory.peek_next_id(), Some(1));
    }

    #[test]
    fn test_zero_capacity_allowed() {
        let mut factory = EventFactory::new();
        let seminar = factory.seminar("Closed", 0, "Someone").unwrap();
        assert_eq!(seminar.capacity(), 0);
    }

    #[test]
    fn test_ids_increase_across_kinds_and_failures() {
        let mut factory = EventFactory::new();

        let first = factory.workshop("A", 1, "", "").unwrap();
        let second = factory.seminar("B", 2, "").unwrap();
        assert!(factory.workshop("C", -5, "", "").is_err());
        let third = factory.seminar("D", 3, "").unwrap();

        assert_eq!((first.id(), second.id(), third.id()), (1, 2, 3));
        assert_eq!(factory.peek_next_id(), Some(4));
    }

    #[test]
    fn test_last_id_exhausts_sequence() {
        let mut factory = EventFactory::starting_at(u32::MAX);

        let last = factory.seminar("Last", 1, "").unwrap();
        assert_eq!(last.id(), u32::MAX);
        assert_eq!(factory.peek_next_id(), None);

        assert_eq!(factory.workshop("Overflow", 1, "", ""), Err(EventError::IdsExhausted));
        assert_eq!(factory.seminar("Overflow", 1, ""), Err(EventError::IdsExhausted));
    }

    #[test]
    fn test_blank_fields_take_defaults() {
        let mut factory = EventFactory::new();

        let workshop = factory.workshop("   ", 10, "", "\t ").unwrap();
        assert_eq!(workshop.name(), "Unnamed Event");
        assert_eq!(
            workshop.details(),
            &EventDetails::Workshop { topic: "General".to_string(), company: "Unknown".to_string() }
        );

        let seminar = factory.seminar("", 10, "  ").unwrap();
        assert_eq!(seminar.name(), "Unnamed Event");
        assert_eq!(seminar.details(), &EventDetails::Seminar { speaker: "TBD".to_string() });
    }

    #[test]
    fn test_fields_trimmed_case_preserved() {
        let mut factory = EventFactory::new();
        let workshop = factory.workshop("  Rust Deep Dive ", 5, " Ownership", "ACME corp  ").unwrap();

        assert_eq!(workshop.name(), "Rust Deep Dive");
        assert_eq!(
            workshop.details(),
            &EventDetails::Workshop { topic: "Ownership".to_string(), company: "ACME corp".to_string() }
        );
    }

    #[test]
    fn test_workshop_detail_lines() {
        let mut factory = EventFactory::new();
        let workshop = factory.workshop("AI Day", 50, "ML", "Acme").unwrap();

        assert_eq!(
            workshop.detail(true),
            vec![
                "Type:     Workshop",
                "ID:       1",
                "Name:     AI Day",
                "Topic:    ML",
                "Company:  Acme",
                "Capacity: 50",
            ]
        );
    }

    #[test]
    fn test_seminar_detail_lines() {
        let mut factory = EventFactory::new();
        let seminar = factory.seminar("Intro", 30, "Dr. X").unwrap();

        assert_eq!(
            seminar.detail(true),
            vec!["Type:     Seminar", "ID:       1", "Name:     Intro", "Speaker:  Dr. X", "Capacity: 30"]
        );
    }

    #[test]
    fn test_compact_detail_is_summary() {
        let mut factory = EventFactory::new();
        let seminar = factory.seminar("Intro", 30, "Dr. X").unwrap();

        assert_eq!(seminar.detail(false), vec![seminar.summary()]);
    }
}
