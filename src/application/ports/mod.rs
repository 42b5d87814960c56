// src/application/ports/mod.rs
pub mod languages;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type LanguageCatalogPort = dyn languages::LanguageCatalog;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
