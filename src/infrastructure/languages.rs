use crate::application::ports::languages::LanguageCatalog;
use crate::domain::content::LanguageCode;
use crate::domain::errors::DomainResult;

/// Fixed list of languages, for hosts without a localization service.
#[derive(Debug, Default, Clone)]
pub struct StaticLanguageCatalog {
    languages: Vec<LanguageCode>,
}

impl StaticLanguageCatalog {
    pub fn new(languages: impl IntoIterator<Item = LanguageCode>) -> Self {
        let mut list: Vec<LanguageCode> = Vec::new();
        for language in languages {
            if !list.contains(&language) {
                list.push(language);
            }
        }
        Self { languages: list }
    }

    pub fn from_codes<'a>(codes: impl IntoIterator<Item = &'a str>) -> DomainResult<Self> {
        let languages = codes
            .into_iter()
            .map(LanguageCode::new)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self::new(languages))
    }
}

impl LanguageCatalog for StaticLanguageCatalog {
    fn all_languages(&self) -> Vec<LanguageCode> {
        self.languages.clone()
    }
}
