// src/application/ports/util.rs

/// Turns a display name into the value stored in the custom URL field.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

impl<F> SlugGenerator for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn slugify(&self, input: &str) -> String {
        self(input)
    }
}
