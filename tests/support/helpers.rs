// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use friendly_greek_urls::application::handlers::AutoSlugHandler;
use friendly_greek_urls::domain::content::FieldAlias;
use friendly_greek_urls::infrastructure::util::GreeklishSlugGenerator;

/// Handler over the fixed `en`/`el` host with the default field alias.
pub fn build_handler() -> AutoSlugHandler {
    AutoSlugHandler::new(
        Arc::new(mocks::FixedLanguages),
        Arc::new(GreeklishSlugGenerator),
        FieldAlias::custom_url(),
    )
}

pub fn build_counting_handler(slugger: Arc<mocks::CountingSlug>) -> AutoSlugHandler {
    AutoSlugHandler::new(
        Arc::new(mocks::FixedLanguages),
        slugger,
        FieldAlias::custom_url(),
    )
}
