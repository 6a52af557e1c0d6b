//! Error handling for the mapper.

/// Errors raised while configuring or running mappings
#[derive(Debug, thiserror::Error)]
pub enum MapperError {
    /// A configuration is already registered for the type pair
    #[error("Configuration already exists for mapping {source_type} -> {destination_type}")]
    DuplicateMapping {
        source_type: String,
        destination_type: String,
    },

    /// A rule for the destination field was already declared on the builder
    #[error("Mapping already configured for field '{field}'")]
    DuplicateFieldRule { field: String },

    /// Named source type without a registered configuration
    #[error(
        "Mapping missing for {source_type} -> {destination_type} but required unless the source is anonymous"
    )]
    MissingMapping {
        source_type: String,
        destination_type: String,
    },

    /// The destination type cannot be determined from the call shape
    #[error(
        "Unable to determine destination type: supply a typed model or an explicit destination type"
    )]
    UnresolvableDestinationType,

    /// Write to a field the model does not declare
    #[error("Model {model} has no field '{field}'")]
    UnknownField { model: String, field: String },

    /// A value could not be stored in a model field
    #[error("Cannot assign value to {model}.{field}: {source}")]
    FieldAssignment {
        model: String,
        field: String,
        #[source]
        source: serde_json::Error,
    },

    /// A model field could not be read as a value
    #[error("Cannot read {model}.{field}: {source}")]
    FieldRead {
        model: String,
        field: String,
        #[source]
        source: serde_json::Error,
    },

    /// Serialization error outside of a field context
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A typed field factory received a source of another type
    #[error("Field factory expected source {expected}, found {found}")]
    SourceTypeMismatch { expected: String, found: String },

    /// A mapped destination is not of the requested type
    #[error("Mapped destination is not a {expected}")]
    DestinationTypeMismatch { expected: String },

    /// The registry lock was poisoned by a panicking writer
    #[error("Mapping registry unavailable: {0}")]
    RegistryUnavailable(String),
}

impl MapperError {
    /// Create a duplicate mapping error for a type pair
    pub fn duplicate_mapping(source_type: impl Into<String>, destination_type: impl Into<String>) -> Self {
        Self::DuplicateMapping {
            source_type: source_type.into(),
            destination_type: destination_type.into(),
        }
    }

    /// Create a missing mapping error for a type pair
    pub fn missing_mapping(source_type: impl Into<String>, destination_type: impl Into<String>) -> Self {
        Self::MissingMapping {
            source_type: source_type.into(),
            destination_type: destination_type.into(),
        }
    }

    /// Create an unknown field error
    pub fn unknown_field(model: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            model: model.into(),
            field: field.into(),
        }
    }
}

/// Result type for mapper operations
pub type Result<T> = std::result::Result<T, MapperError>;
