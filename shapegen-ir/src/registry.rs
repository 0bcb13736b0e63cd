//! Name-keyed collection of record types.

use indexmap::IndexMap;

use crate::{Describe, RecordType};

/// Record types keyed by name, in registration order.
///
/// Registration is idempotent per name, which lets recursive registration of
/// self-referential types stop at the first repeat.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    records: IndexMap<String, RecordType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry holding `T` and every record reachable from it.
    pub fn of<T: Describe + ?Sized>() -> Self {
        let mut registry = Self::new();
        T::register(&mut registry);
        registry
    }

    /// Register `T` and every record reachable from it.
    pub fn add<T: Describe + ?Sized>(&mut self) -> &mut Self {
        T::register(self);
        self
    }

    /// Insert a record type.
    ///
    /// Returns `false` and leaves the registry untouched when a record with
    /// the same name is already present.
    pub fn insert(&mut self, record: RecordType) -> bool {
        if self.records.contains_key(&record.name) {
            return false;
        }
        self.records.insert(record.name.clone(), record);
        true
    }

    pub fn get(&self, name: &str) -> Option<&RecordType> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RecordType> {
        self.records.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

impl FromIterator<RecordType> for TypeRegistry {
    fn from_iter<I: IntoIterator<Item = RecordType>>(iter: I) -> Self {
        let mut registry = Self::new();
        for record in iter {
            registry.insert(record);
        }
        registry
    }
}
