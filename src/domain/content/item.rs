use super::value_objects::{FieldAlias, LanguageCode};

/// Narrow view of a host content item.
///
/// `language` is `None` for the single value of language invariant
/// content and `Some` for a value scoped to one variant.
pub trait ContentItem {
    /// Name of the item as a whole. Used for invariant content.
    fn name(&self) -> Option<&str>;

    /// Whether the item carries a variant for `language`, named or not.
    fn has_variant(&self, language: &LanguageCode) -> bool;

    fn variant_name(&self, language: &LanguageCode) -> Option<&str>;

    fn is_language_invariant(&self) -> bool;

    /// Whether the item's type declares a field with this alias.
    fn has_field(&self, alias: &FieldAlias) -> bool;

    fn field_value(&self, alias: &FieldAlias, language: Option<&LanguageCode>) -> Option<&str>;

    fn set_field_value(
        &mut self,
        alias: &FieldAlias,
        value: Option<String>,
        language: Option<&LanguageCode>,
    );

    /// Display name for a unit: the variant's name, or the item's name when
    /// `language` is `None`.
    fn display_name(&self, language: Option<&LanguageCode>) -> Option<&str> {
        match language {
            Some(language) => self.variant_name(language),
            None => self.name(),
        }
    }

    /// A missing value and an empty one both count as "no value".
    fn has_value(&self, alias: &FieldAlias, language: Option<&LanguageCode>) -> bool {
        self.field_value(alias, language)
            .is_some_and(|value| !value.is_empty())
    }
}
