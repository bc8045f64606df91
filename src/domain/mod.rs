pub mod category;
pub mod post;
pub mod slug;
pub mod types;
