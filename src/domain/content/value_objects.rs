// src/domain/content/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::Serialize;
use std::{fmt, str::FromStr};

/// Alias the host uses for the custom URL field.
pub const CUSTOM_URL_ALIAS: &str = "umbracoUrlName";

/// ISO language code, stored lowercase so lookups ignore case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation(
                "language code cannot be empty".into(),
            ));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for LanguageCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<LanguageCode> for String {
    fn from(value: LanguageCode) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldAlias(String);

impl FieldAlias {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("field alias cannot be empty".into()));
        }
        Ok(Self(value))
    }

    /// The conventional custom URL alias.
    pub fn custom_url() -> Self {
        Self(CUSTOM_URL_ALIAS.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FieldAlias {
    fn default() -> Self {
        Self::custom_url()
    }
}

impl fmt::Display for FieldAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
