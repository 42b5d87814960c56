// tests/support/mocks/content.rs
use friendly_greek_urls::domain::content::{ContentItem, FieldAlias, LanguageCode};
use friendly_greek_urls::infrastructure::content::InMemoryContent;

/// A field write seen by [`RecordingContent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Write {
    pub alias: String,
    pub language: Option<String>,
    pub value: Option<String>,
}

/// Delegates to [`InMemoryContent`] and keeps a log of every write.
#[derive(Debug, Clone, Default)]
pub struct RecordingContent {
    pub inner: InMemoryContent,
    pub writes: Vec<Write>,
}

impl RecordingContent {
    pub fn new(inner: InMemoryContent) -> Self {
        Self {
            inner,
            writes: Vec::new(),
        }
    }
}

impl ContentItem for RecordingContent {
    fn name(&self) -> Option<&str> {
        self.inner.name()
    }

    fn has_variant(&self, language: &LanguageCode) -> bool {
        self.inner.has_variant(language)
    }

    fn variant_name(&self, language: &LanguageCode) -> Option<&str> {
        self.inner.variant_name(language)
    }

    fn is_language_invariant(&self) -> bool {
        self.inner.is_language_invariant()
    }

    fn has_field(&self, alias: &FieldAlias) -> bool {
        self.inner.has_field(alias)
    }

    fn field_value(&self, alias: &FieldAlias, language: Option<&LanguageCode>) -> Option<&str> {
        self.inner.field_value(alias, language)
    }

    fn set_field_value(
        &mut self,
        alias: &FieldAlias,
        value: Option<String>,
        language: Option<&LanguageCode>,
    ) {
        self.writes.push(Write {
            alias: alias.as_str().to_owned(),
            language: language.map(|l| l.as_str().to_owned()),
            value: value.clone(),
        });
        self.inner.set_field_value(alias, value, language);
    }
}
