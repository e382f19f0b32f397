use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{NewUser, PasswordHash, Username},
};

/// Operator-side account provisioning; there is no public sign-up.
pub struct CreateUserCommand {
    pub username: String,
    pub password: String,
    pub is_superuser: bool,
}

impl UserCommandService {
    pub async fn create_user(&self, command: CreateUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        validate_password(&command.password, username.as_str())?;

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let created_at = self.clock.now();
        let new_user = NewUser::new(username, password_hash, command.is_superuser, created_at);
        let user = self.user_repo.insert(new_user).await?;

        tracing::info!(
            user_id = %user.id,
            is_superuser = user.is_superuser,
            "user created"
        );
        Ok(user.into())
    }
}
