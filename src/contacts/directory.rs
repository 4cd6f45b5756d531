use std::collections::HashMap;

use crate::error::Result;
use super::contact::Contact;

/// Coordinates of a record inside the sectioned view: section index
/// into `section_keys()` plus row index inside that section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub section: usize,
    pub row: usize,
}

/// The in-memory, alphabetically sectioned collection of contacts.
///
/// The flat `items` list is authoritative; the section map and the
/// sorted key list are derived from it in full after every mutation.
/// Records sort case-insensitively by full name inside each section,
/// and a record whose name changes moves to whatever section its
/// current name puts it in at rebuild time. Records with no name at
/// all group under the empty-string key, which sorts first.
#[derive(Debug, Default)]
pub struct Directory {
    items: Vec<Contact>,
    sections: HashMap<String, Vec<Contact>>,
    section_keys: Vec<String>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a JSON array of contact records and builds the
    /// sectioned view.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let items: Vec<Contact> = serde_json::from_slice(data)?;
        let mut directory = Self {
            items,
            sections: HashMap::new(),
            section_keys: Vec::new(),
        };
        directory.rebuild();
        Ok(directory)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current section keys, sorted case-insensitively.
    pub fn section_keys(&self) -> &[String] {
        &self.section_keys
    }

    /// Number of records under the given section key, zero when the
    /// key is absent.
    pub fn record_count(&self, section_key: &str) -> usize {
        self.sections.get(section_key).map(|v| v.len()).unwrap_or(0)
    }

    /// Bounds-checked lookup by position; out-of-range coordinates
    /// are "not found", never a fault.
    pub fn record(&self, section: usize, row: usize) -> Option<&Contact> {
        let key = self.section_keys.get(section)?;
        self.sections.get(key)?.get(row)
    }

    /// Resolves a record's position in the current section mapping.
    ///
    /// Matching is by stable identifier, falling back to the canonical
    /// URL and then full field equality for unsaved drafts. Callers
    /// holding a record taken before a mutation must re-resolve after
    /// the mutation; a stale probe may legitimately return `None`.
    pub fn position_of(&self, contact: &Contact) -> Option<Position> {
        for (section, key) in self.section_keys.iter().enumerate() {
            let records = self.sections.get(key)?;
            for (row, candidate) in records.iter().enumerate() {
                if same_record(candidate, contact) {
                    return Some(Position { section, row });
                }
            }
        }
        None
    }

    /// Replaces the record whose identifier matches `updated` and
    /// rebuilds the sectioned view.
    ///
    /// Returns `None` when no record matches (the update is a no-op),
    /// otherwise the record's position before and after the mutation
    /// so callers can derive a minimal UI delta.
    pub fn update(&mut self, updated: Contact) -> Option<(Option<Position>, Option<Position>)> {
        let id = updated.id()?;
        let index = self.items.iter().position(|c| c.id() == Some(id))?;

        let old_position = self.position_of(&self.items[index]);
        self.items.remove(index);
        self.items.push(updated);
        self.rebuild();

        let new_position = self.items.last().and_then(|c| self.position_of(c));
        Some((old_position, new_position))
    }

    /// Appends unconditionally (no duplicate check), rebuilds, and
    /// resolves the new record's position.
    pub fn append(&mut self, contact: Contact) -> Option<Position> {
        self.items.push(contact);
        self.rebuild();
        self.items.last().and_then(|c| self.position_of(c))
    }

    // Full recompute of the derived structures from the flat list.
    // Linear-ish in the record count; acceptable for contact-list
    // sized data.
    fn rebuild(&mut self) {
        self.sections.clear();

        let mut sorted = self.items.clone();
        sorted.sort_by(|a, b| {
            a.full_name().to_uppercase().cmp(&b.full_name().to_uppercase())
        });

        for contact in sorted {
            self.sections
                .entry(contact.section_key())
                .or_default()
                .push(contact);
        }

        let mut keys: Vec<String> = self.sections.keys().cloned().collect();
        keys.sort_by(|a, b| a.to_uppercase().cmp(&b.to_uppercase()));
        self.section_keys = keys;
    }
}

// Two records are the "same contact" when their identifiers match,
// never by reference. Unsaved drafts fall back to the canonical URL
// key, then to field equality.
fn same_record(a: &Contact, b: &Contact) -> bool {
    match (a.id(), b.id()) {
        (Some(x), Some(y)) => x == y,
        (None, None) => {
            if !a.key().is_empty() || !b.key().is_empty() {
                a.key() == b.key()
            } else {
                a == b
            }
        }
        _ => false,
    }
}
