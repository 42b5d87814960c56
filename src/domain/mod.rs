pub mod content;
pub mod errors;
pub mod slug;
