// tests/support/mocks/util.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use friendly_greek_urls::application::ports::util::SlugGenerator;
use friendly_greek_urls::domain::slug::to_friendly_slug;

/// Greeklish generator that counts how often it was asked for a slug.
#[derive(Default)]
pub struct CountingSlug {
    calls: AtomicUsize,
}

impl CountingSlug {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SlugGenerator for CountingSlug {
    fn slugify(&self, input: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        to_friendly_slug(input)
    }
}
