mod create;
mod login;
mod password;
mod service;

pub use create::CreateUserCommand;
pub use login::{LoginResult, LoginUserCommand};
pub use service::UserCommandService;
