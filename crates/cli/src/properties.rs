// SPDX-License-Identifier: MIT

//! Ordered property multimap attached to a test suite.
//!
//! Property names may repeat (FSTESTVER carries one entry per component
//! version), so this is a sequence of pairs with linear-scan lookups,
//! not a hash map. Insertion order is preserved for iteration.

/// One `<property name= value=>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

/// Ordered collection of properties. `Clone` is a full value copy:
/// mutating a clone never affects the suite it was copied from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<Property>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry, keeping any existing entries with the same name.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push(Property {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Value of the first entry with the given name. Absent is `None`,
    /// distinct from an entry holding an empty string.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Every value stored under the given name, in insertion order.
    pub fn all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.entries
            .iter()
            .filter(move |p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Delete every entry with the given name. No-op if none exist.
    pub fn remove_all(&mut self, name: &str) {
        self.entries.retain(|p| p.name != name);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "properties_tests.rs"]
mod tests;
