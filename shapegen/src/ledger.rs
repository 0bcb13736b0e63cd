//! Per-generator record of emitted types.

use indexmap::IndexSet;

/// Type names already rendered, or being rendered, by one generator.
///
/// A name enters the ledger when its rendering begins, so a type that refers
/// back to itself (directly or through other records) finds itself present
/// and is not rendered again.
#[derive(Debug, Clone, Default)]
pub struct EmissionLedger {
    names: IndexSet<String>,
}

impl EmissionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `name` for rendering.
    ///
    /// Returns `false` if it was already claimed.
    pub fn begin(&mut self, name: &str) -> bool {
        if self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_string())
    }

    /// Release a claim whose rendering failed.
    pub fn abandon(&mut self, name: &str) {
        self.names.shift_remove(name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Claimed names in the order rendering began.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
