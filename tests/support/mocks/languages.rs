// tests/support/mocks/languages.rs
use friendly_greek_urls::application::ports::languages::LanguageCatalog;
use friendly_greek_urls::domain::content::LanguageCode;
use once_cell::sync::Lazy;

/// Languages configured in the test host.
static HOST_LANGUAGES: Lazy<Vec<LanguageCode>> = Lazy::new(|| {
    ["en", "el"]
        .into_iter()
        .map(|c| LanguageCode::new(c).expect("invalid language code in tests/support"))
        .collect()
});

pub fn code(value: &str) -> LanguageCode {
    LanguageCode::new(value).expect("invalid language code in test")
}

#[derive(Clone)]
pub struct FixedLanguages;

impl LanguageCatalog for FixedLanguages {
    fn all_languages(&self) -> Vec<LanguageCode> {
        HOST_LANGUAGES.clone()
    }
}
