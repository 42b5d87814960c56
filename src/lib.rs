//! Greeklish URL slugs for CMS content.
//!
//! When content is about to be saved and its custom URL field is empty, the
//! item's name is transliterated from Greek, stripped of diacritics and
//! filtered down to a URL safe token, then written back into the field.
//!
//! The host keeps ownership of storage and event dispatch. It implements
//! [`ContentItem`](domain::content::ContentItem) and
//! [`LanguageCatalog`](application::ports::languages::LanguageCatalog),
//! builds a [`ContentSaving`](domain::content::ContentSaving) event and hands
//! it to the [`AutoSlugHandler`](application::handlers::AutoSlugHandler).

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

use std::sync::Arc;

use crate::application::{
    ports::{languages::LanguageCatalog, util::SlugGenerator},
    services::ApplicationServices,
};
use crate::config::{FriendlyUrlsConfig, SlugStyle};
use crate::infrastructure::{
    languages::StaticLanguageCatalog,
    util::{AsciiSlugGenerator, GreeklishSlugGenerator},
};

/// Wires the services from configuration.
///
/// `languages` is the host's language enumeration. When it is `None`, the
/// languages listed in the configuration are used instead.
pub fn bootstrap(
    config: &FriendlyUrlsConfig,
    languages: Option<Arc<dyn LanguageCatalog>>,
) -> ApplicationServices {
    let slugger: Arc<dyn SlugGenerator> = match config.slug_style() {
        SlugStyle::Greeklish => Arc::new(GreeklishSlugGenerator),
        SlugStyle::Ascii => Arc::new(AsciiSlugGenerator),
    };

    let languages: Arc<dyn LanguageCatalog> = match languages {
        Some(languages) => languages,
        None => Arc::new(StaticLanguageCatalog::new(config.languages().iter().cloned())),
    };

    tracing::info!(
        field = %config.field_alias(),
        style = %config.slug_style(),
        "friendly urls ready"
    );

    ApplicationServices::new(languages, slugger, config.field_alias().clone())
}
