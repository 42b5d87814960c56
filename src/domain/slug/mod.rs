//! Title to URL slug pipeline.
//!
//! A title is first rendered in Greeklish by [`transliterate`] and then
//! reduced to the `A-Z a-z 0-9 - _` alphabet by [`slugify`]. Both steps are
//! total: every input, including the empty string, produces a string.

mod slugify;
mod transliterate;

pub use slugify::{is_allowed, is_separator, slugify};
pub use transliterate::transliterate;

/// Builds the URL slug for a human entered title.
///
/// ```
/// use friendly_greek_urls::domain::slug::to_friendly_slug;
///
/// assert_eq!(to_friendly_slug("Καλημέρα κόσμε!"), "Kalimera-kosme");
/// ```
pub fn to_friendly_slug(input: &str) -> String {
    slugify(&transliterate(input))
}
