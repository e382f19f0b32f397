// src/domain/mod.rs
pub mod actor;
pub mod article;
pub mod comment;
pub mod cursor;
pub mod errors;
pub mod moderation;
pub mod specification;
pub mod user;
pub mod visibility;

pub use actor::Actor;
pub use cursor::PageCursor;
