// src/application/dto.rs
use crate::domain::content::LanguageCode;
use serde::Serialize;

/// A custom URL value written during a save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugAssignment {
    /// `None` for language invariant content.
    pub language: Option<LanguageCode>,
    /// `None` when the unit had no display name.
    pub slug: Option<String>,
}

impl SlugAssignment {
    pub fn new(language: Option<LanguageCode>, slug: Option<String>) -> Self {
        Self { language, slug }
    }
}
