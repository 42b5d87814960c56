// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod content;
pub mod languages;
pub mod util;

pub use content::{RecordingContent, Write};
pub use languages::{FixedLanguages, code};
pub use util::CountingSlug;
