pub mod articles;
pub mod comments;
mod paging;
pub mod users;
