//! Rendering configuration.

/// Rendering options for one [`Generator`](crate::Generator).
///
/// Only affects how blocks are written, never which types are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Inserted after the `I` marker of every interface name.
    pub prefix: String,
    /// Indentation unit for field lines.
    pub indentation: String,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn indentation(mut self, indentation: impl Into<String>) -> Self {
        self.indentation = indentation.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            indentation: "\t".to_string(),
        }
    }
}
