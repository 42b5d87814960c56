use std::collections::BTreeMap;

use crate::domain::content::{ContentItem, FieldAlias, LanguageCode};

/// `ContentItem` kept entirely in memory.
///
/// An item without variant names is language invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryContent {
    name: Option<String>,
    variant_names: BTreeMap<LanguageCode, Option<String>>,
    fields: BTreeMap<FieldAlias, BTreeMap<Option<LanguageCode>, String>>,
}

impl InMemoryContent {
    pub fn invariant(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_variant(mut self, language: LanguageCode, name: impl Into<String>) -> Self {
        self.variant_names.insert(language, Some(name.into()));
        self
    }

    /// Adds a variant whose name has not been filled in.
    pub fn with_unnamed_variant(mut self, language: LanguageCode) -> Self {
        self.variant_names.insert(language, None);
        self
    }

    /// Declares a field without giving it a value.
    pub fn with_field(mut self, alias: FieldAlias) -> Self {
        self.fields.entry(alias).or_default();
        self
    }

    pub fn with_value(
        mut self,
        alias: FieldAlias,
        language: Option<LanguageCode>,
        value: impl Into<String>,
    ) -> Self {
        self.fields
            .entry(alias)
            .or_default()
            .insert(language, value.into());
        self
    }
}

impl ContentItem for InMemoryContent {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn has_variant(&self, language: &LanguageCode) -> bool {
        self.variant_names.contains_key(language)
    }

    fn variant_name(&self, language: &LanguageCode) -> Option<&str> {
        self.variant_names.get(language)?.as_deref()
    }

    fn is_language_invariant(&self) -> bool {
        self.variant_names.is_empty()
    }

    fn has_field(&self, alias: &FieldAlias) -> bool {
        self.fields.contains_key(alias)
    }

    fn field_value(&self, alias: &FieldAlias, language: Option<&LanguageCode>) -> Option<&str> {
        self.fields
            .get(alias)?
            .get(&language.cloned())
            .map(String::as_str)
    }

    fn set_field_value(
        &mut self,
        alias: &FieldAlias,
        value: Option<String>,
        language: Option<&LanguageCode>,
    ) {
        let values = self.fields.entry(alias.clone()).or_default();
        match value {
            Some(value) => {
                values.insert(language.cloned(), value);
            }
            None => {
                values.remove(&language.cloned());
            }
        }
    }
}
