pub mod content;
pub mod languages;
pub mod util;
