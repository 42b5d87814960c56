// src/application/handlers/auto_slug.rs
use std::sync::Arc;

use tracing::{debug, trace};

use crate::{
    application::{
        dto::SlugAssignment,
        ports::{languages::LanguageCatalog, util::SlugGenerator},
    },
    domain::content::{
        AutoSlugSpec, ContentSaving, FieldAlias, LanguageCode, SavedEntity, SlugUnit,
    },
};

/// Fills an empty custom URL field from the item's name when content is
/// saved.
///
/// Invariant content has a single unit. Variant content is checked once
/// per configured language, and only languages that are part of the save
/// are eligible. A non-empty value is never replaced.
pub struct AutoSlugHandler {
    languages: Arc<dyn LanguageCatalog>,
    slugger: Arc<dyn SlugGenerator>,
    field: FieldAlias,
}

impl AutoSlugHandler {
    pub fn new(
        languages: Arc<dyn LanguageCatalog>,
        slugger: Arc<dyn SlugGenerator>,
        field: FieldAlias,
    ) -> Self {
        Self {
            languages,
            slugger,
            field,
        }
    }

    pub fn field(&self) -> &FieldAlias {
        &self.field
    }

    /// Applies the rule to every entity of the event and returns the writes
    /// that were made, in the order they happened.
    pub fn handle(&self, event: &mut ContentSaving<'_>) -> Vec<SlugAssignment> {
        let languages = self.languages.all_languages();
        let mut assignments = Vec::new();

        for entity in event.entities_mut() {
            if entity.content().is_language_invariant() {
                self.apply(entity, SlugUnit::Invariant, &mut assignments);
                continue;
            }

            for language in &languages {
                let saving = entity.is_saving_language(language);
                self.apply(entity, SlugUnit::Variant { language, saving }, &mut assignments);
            }
        }

        debug!(
            field = %self.field,
            writes = assignments.len(),
            "auto slug pass finished"
        );
        assignments
    }

    fn apply(
        &self,
        entity: &mut SavedEntity<'_>,
        unit: SlugUnit<'_>,
        assignments: &mut Vec<SlugAssignment>,
    ) {
        let language = unit.language();

        if !AutoSlugSpec::new(entity.content(), &self.field).is_satisfied(unit) {
            trace!(language = ?language.map(LanguageCode::as_str), "auto slug skipped");
            return;
        }

        let slug = entity
            .content()
            .display_name(language)
            .map(|name| self.slugger.slugify(name));

        debug!(
            language = ?language.map(LanguageCode::as_str),
            slug = ?slug,
            "writing generated slug"
        );
        entity
            .content_mut()
            .set_field_value(&self.field, slug.clone(), language);
        assignments.push(SlugAssignment::new(language.cloned(), slug));
    }
}
