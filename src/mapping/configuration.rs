//! Mapping configuration for one (source, destination) type pair

use rustc_hash::FxHashMap;

use super::rule::{Factory, FieldRule, Resolution};

/// Name under which the catch-all rule is reported
pub const ALL_FIELDS: &str = "*";

/// Field rules registered for one type pair
///
/// A field has at most one rule, so it can never be both ignored and
/// computed. Exact field rules take precedence over the catch-all rule
/// regardless of declaration order.
#[derive(Debug, Clone, Default)]
pub struct MappingConfiguration {
    rules: FxHashMap<String, FieldRule>,
    catch_all: Option<FieldRule>,
}

impl MappingConfiguration {
    /// Create an empty configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an exact rule exists for the field
    ///
    /// A field literally named `*` is an ordinary field here; the catch-all
    /// rule is tracked separately.
    #[must_use]
    pub fn has_field_rule(&self, field: &str) -> bool {
        self.rules.contains_key(field)
    }

    /// Whether the catch-all rule is declared
    #[must_use]
    pub fn has_catch_all(&self) -> bool {
        self.catch_all.is_some()
    }

    pub(crate) fn insert_rule(&mut self, field: String, rule: FieldRule) {
        self.rules.insert(field, rule);
    }

    pub(crate) fn set_catch_all(&mut self, rule: FieldRule) {
        self.catch_all = Some(rule);
    }

    /// Exact rule declared for the field
    #[must_use]
    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.rules.get(field)
    }

    /// Catch-all rule, if declared
    #[must_use]
    pub fn catch_all(&self) -> Option<&FieldRule> {
        self.catch_all.as_ref()
    }

    /// Whether the field is ignored after applying precedence
    #[must_use]
    pub fn is_ignored(&self, field: &str) -> bool {
        matches!(self.resolve(field), Resolution::Ignore)
    }

    /// Factory for the field after applying precedence
    #[must_use]
    pub fn factory(&self, field: &str) -> Option<&Factory> {
        match self.resolve(field) {
            Resolution::Factory(factory) => Some(factory),
            _ => None,
        }
    }

    /// Fields with an exact `Ignore` rule
    pub fn ignored_fields(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .filter(|(_, rule)| rule.is_ignore())
            .map(|(field, _)| field.as_str())
    }

    /// Fields with an exact factory rule
    pub fn factory_fields(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .filter(|(_, rule)| !rule.is_ignore())
            .map(|(field, _)| field.as_str())
    }

    /// Number of exact field rules
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rule at all is declared
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.catch_all.is_none()
    }

    /// Resolve how a destination field is produced
    ///
    /// Exact rule first, then the catch-all, then the copy convention.
    #[must_use]
    pub fn resolve(&self, field: &str) -> Resolution<'_> {
        match self.rules.get(field).or(self.catch_all.as_ref()) {
            Some(FieldRule::Ignore) => Resolution::Ignore,
            Some(FieldRule::Factory(factory)) => Resolution::Factory(factory),
            None => Resolution::Copy,
        }
    }
}
