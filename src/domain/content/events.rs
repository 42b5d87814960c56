use std::collections::BTreeSet;

use super::{item::ContentItem, value_objects::LanguageCode};

/// One item taking part in a save, with the languages being saved for it.
pub struct SavedEntity<'a> {
    content: &'a mut dyn ContentItem,
    saving_languages: BTreeSet<LanguageCode>,
}

impl<'a> SavedEntity<'a> {
    pub fn new(
        content: &'a mut dyn ContentItem,
        saving_languages: impl IntoIterator<Item = LanguageCode>,
    ) -> Self {
        Self {
            content,
            saving_languages: saving_languages.into_iter().collect(),
        }
    }

    /// Entity saved without any language scope (invariant content).
    pub fn invariant(content: &'a mut dyn ContentItem) -> Self {
        Self {
            content,
            saving_languages: BTreeSet::new(),
        }
    }

    /// A language is being saved only if it was requested for this save
    /// and the item actually has a variant for it.
    pub fn is_saving_language(&self, language: &LanguageCode) -> bool {
        self.saving_languages.contains(language) && self.content.has_variant(language)
    }

    pub fn content(&self) -> &(dyn ContentItem + 'a) {
        &*self.content
    }

    pub fn content_mut(&mut self) -> &mut (dyn ContentItem + 'a) {
        &mut *self.content
    }
}

/// Raised by the host right before content is persisted.
#[derive(Default)]
pub struct ContentSaving<'a> {
    entities: Vec<SavedEntity<'a>>,
}

impl<'a> ContentSaving<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entity(mut self, entity: SavedEntity<'a>) -> Self {
        self.entities.push(entity);
        self
    }

    pub fn push(&mut self, entity: SavedEntity<'a>) {
        self.entities.push(entity);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities_mut(&mut self) -> impl Iterator<Item = &mut SavedEntity<'a>> {
        self.entities.iter_mut()
    }
}

impl<'a> FromIterator<SavedEntity<'a>> for ContentSaving<'a> {
    fn from_iter<I: IntoIterator<Item = SavedEntity<'a>>>(iter: I) -> Self {
        Self {
            entities: iter.into_iter().collect(),
        }
    }
}
