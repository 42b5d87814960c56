pub mod events;
pub mod item;
pub mod specifications;
pub mod value_objects;

pub use events::{ContentSaving, SavedEntity};
pub use item::ContentItem;
pub use specifications::{AutoSlugSpec, SlugUnit};
pub use value_objects::{FieldAlias, LanguageCode};
