use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::to_friendly_slug;

/// Greek titles rendered in Greeklish, e.g. `Αθήνα` → `A8ina`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreeklishSlugGenerator;

impl SlugGenerator for GreeklishSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        to_friendly_slug(input)
    }
}

/// Lowercase ASCII slugs from the `slug` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiSlugGenerator;

impl SlugGenerator for AsciiSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slug::slugify(input)
    }
}
