// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        handlers::AutoSlugHandler,
        ports::{languages::LanguageCatalog, util::SlugGenerator},
    },
    domain::content::FieldAlias,
};

pub struct ApplicationServices {
    pub auto_slug: Arc<AutoSlugHandler>,
    slugger: Arc<dyn SlugGenerator>,
}

impl ApplicationServices {
    pub fn new(
        languages: Arc<dyn LanguageCatalog>,
        slugger: Arc<dyn SlugGenerator>,
        field: FieldAlias,
    ) -> Self {
        let auto_slug = Arc::new(AutoSlugHandler::new(
            languages,
            Arc::clone(&slugger),
            field,
        ));

        Self { auto_slug, slugger }
    }

    /// The generator the handler uses, for hosts that want to preview a slug.
    pub fn slug_generator(&self) -> Arc<dyn SlugGenerator> {
        Arc::clone(&self.slugger)
    }
}
