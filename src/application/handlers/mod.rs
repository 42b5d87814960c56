pub mod auto_slug;

pub use auto_slug::AutoSlugHandler;
