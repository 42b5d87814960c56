use super::{
    item::ContentItem,
    value_objects::{FieldAlias, LanguageCode},
};

/// Slot of an item that can receive a slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugUnit<'a> {
    Invariant,
    Variant {
        language: &'a LanguageCode,
        saving: bool,
    },
}

impl<'a> SlugUnit<'a> {
    pub const fn language(&self) -> Option<&'a LanguageCode> {
        match *self {
            Self::Invariant => None,
            Self::Variant { language, .. } => Some(language),
        }
    }
}

/// Decides whether a unit should get a generated slug.
pub struct AutoSlugSpec<'a> {
    content: &'a dyn ContentItem,
    field: &'a FieldAlias,
}

impl<'a> AutoSlugSpec<'a> {
    pub fn new(content: &'a dyn ContentItem, field: &'a FieldAlias) -> Self {
        Self { content, field }
    }

    pub fn is_satisfied(&self, unit: SlugUnit<'_>) -> bool {
        let in_scope = match unit {
            SlugUnit::Invariant => true,
            SlugUnit::Variant { saving, .. } => saving,
        };

        in_scope
            && self.content.has_field(self.field)
            && !self.content.has_value(self.field, unit.language())
    }
}
