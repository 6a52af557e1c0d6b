//! Configuration for the `Mapper`.

/// What the default convention does when the source lacks a destination field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingSourceField {
    /// Write the absence sentinel, resetting the field to its default
    #[default]
    Reset,
    /// Leave the destination field untouched
    Keep,
}

/// Configuration for the `Mapper`
#[derive(Debug, Clone, Default)]
pub struct MapperConfig {
    /// Behaviour for fields the source does not provide
    pub missing_source_field: MissingSourceField,
    /// Log every field write at trace level
    pub log_field_writes: bool,
}

impl MapperConfig {
    /// Create a configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the behaviour for fields missing on the source
    #[must_use]
    pub fn with_missing_source_field(mut self, policy: MissingSourceField) -> Self {
        self.missing_source_field = policy;
        self
    }

    /// Enable or disable trace logging of field writes
    #[must_use]
    pub fn with_field_write_logging(mut self, enabled: bool) -> Self {
        self.log_field_writes = enabled;
        self
    }
}
