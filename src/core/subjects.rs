//! Categorical encoding of participants.
//!
//! The reply detector and the aggregation engine only ever compare subjects
//! for equality, so participants are encoded to dense integer ids by a
//! simple de-duplicating map. Ids are assigned in order of first appearance
//! in the event sequence; that order is also the tie-break order for winner
//! selection.

use std::collections::HashMap;

use crate::event::MessageEvent;

/// Dense mapping from participant name to integer id.
///
/// # Example
///
/// ```
/// use chatstats::core::subjects::SubjectRegistry;
/// use chatstats::MessageEvent;
/// use chrono::Utc;
///
/// let events = vec![
///     MessageEvent::new(Utc::now(), "Alice", "hi"),
///     MessageEvent::new(Utc::now(), "Bob", "hey"),
///     MessageEvent::new(Utc::now(), "Alice", "how are you"),
/// ];
/// let (registry, ids) = SubjectRegistry::encode(&events);
/// assert_eq!(registry.names(), &["Alice", "Bob"]);
/// assert_eq!(ids, vec![0, 1, 0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectRegistry {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl SubjectRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes every event's subject, building the registry as a side effect.
    ///
    /// Returns the registry together with one dense id per event, aligned to
    /// the input order.
    pub fn encode(events: &[MessageEvent]) -> (Self, Vec<usize>) {
        let mut registry = Self::new();
        let ids = events
            .iter()
            .map(|event| registry.intern(event.subject()))
            .collect();
        (registry, ids)
    }

    /// Returns the id for `name`, inserting it if unseen.
    pub fn intern(&mut self, name: &str) -> usize {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        id
    }

    /// Returns the id for `name` if it has been seen.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns the name for `id`, if valid.
    pub fn name(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// All participant names in first-appearance order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of distinct participants.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` when no participant has been seen.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
