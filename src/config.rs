// src/config.rs
use std::{env, fmt, str::FromStr};
use thiserror::Error;

use crate::domain::content::{FieldAlias, LanguageCode};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlugStyle {
    /// Greek to Latin transliteration followed by the URL filter.
    #[default]
    Greeklish,
    /// Lowercase ASCII via the `slug` crate.
    Ascii,
}

impl SlugStyle {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Greeklish => "greeklish",
            Self::Ascii => "ascii",
        }
    }
}

impl fmt::Display for SlugStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlugStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "greeklish" => Ok(Self::Greeklish),
            "ascii" => Ok(Self::Ascii),
            other => Err(ConfigError::Invalid(format!(
                "FRIENDLY_URLS_SLUG_STYLE must be `greeklish` or `ascii`, got `{other}`"
            ))),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FriendlyUrlsConfig {
    field_alias: FieldAlias,
    slug_style: SlugStyle,
    languages: Vec<LanguageCode>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl FriendlyUrlsConfig {
    /// Build configuration from environment variables. Every key is
    /// optional; present values are validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let field_alias = match lookup("FRIENDLY_URLS_FIELD_ALIAS") {
            Some(alias) => FieldAlias::new(alias.trim()).map_err(|err| {
                ConfigError::Invalid(format!("FRIENDLY_URLS_FIELD_ALIAS: {err}"))
            })?,
            None => FieldAlias::default(),
        };

        let slug_style = lookup("FRIENDLY_URLS_SLUG_STYLE")
            .map(|v| v.parse::<SlugStyle>())
            .transpose()?
            .unwrap_or_default();

        let languages = lookup("FRIENDLY_URLS_LANGUAGES")
            .map(|s| parse_languages(&s))
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            field_alias,
            slug_style,
            languages,
        })
    }

    pub fn field_alias(&self) -> &FieldAlias {
        &self.field_alias
    }

    pub fn slug_style(&self) -> SlugStyle {
        self.slug_style
    }

    /// Languages listed in the environment, empty when none were given.
    pub fn languages(&self) -> &[LanguageCode] {
        &self.languages
    }
}

fn parse_languages(raw: &str) -> Result<Vec<LanguageCode>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            LanguageCode::new(p)
                .map_err(|err| ConfigError::Invalid(format!("FRIENDLY_URLS_LANGUAGES: {err}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = FriendlyUrlsConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.field_alias().as_str(), "umbracoUrlName");
        assert_eq!(config.slug_style(), SlugStyle::Greeklish);
        assert!(config.languages().is_empty());
    }

    #[test]
    fn reads_all_keys() {
        let config = FriendlyUrlsConfig::from_lookup(lookup(&[
            ("FRIENDLY_URLS_FIELD_ALIAS", "urlSlug"),
            ("FRIENDLY_URLS_SLUG_STYLE", "ASCII"),
            ("FRIENDLY_URLS_LANGUAGES", "el, EN,,"),
        ]))
        .unwrap();

        assert_eq!(config.field_alias().as_str(), "urlSlug");
        assert_eq!(config.slug_style(), SlugStyle::Ascii);
        let codes: Vec<&str> = config.languages().iter().map(LanguageCode::as_str).collect();
        assert_eq!(codes, vec!["el", "en"]);
    }

    #[test]
    fn blank_alias_is_invalid() {
        let err = FriendlyUrlsConfig::from_lookup(lookup(&[("FRIENDLY_URLS_FIELD_ALIAS", "  ")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_style_is_invalid() {
        let err = FriendlyUrlsConfig::from_lookup(lookup(&[("FRIENDLY_URLS_SLUG_STYLE", "klingon")]))
            .unwrap_err();
        assert!(err.to_string().contains("klingon"));
    }
}
