// src/application/ports/languages.rs
use crate::domain::content::LanguageCode;

/// Every language configured in the host, whether or not an item has a
/// variant for it.
pub trait LanguageCatalog: Send + Sync {
    fn all_languages(&self) -> Vec<LanguageCode>;
}
