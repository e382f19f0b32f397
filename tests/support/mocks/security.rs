// tests/support/mocks/security.rs
use async_trait::async_trait;
use blog_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
};
use chrono::Duration;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

pub const TEST_PASSWORD: &str = "correct horse battery";

/// Reversible "hash" so seeded users can log in without argon2 cost.
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/// Issues opaque `token-<n>` strings and remembers who they belong to.
pub struct StaticTokenManager {
    clock: Arc<dyn Clock>,
    issued: Mutex<HashMap<String, AuthenticatedUser>>,
}

impl StaticTokenManager {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            issued: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl TokenManager for StaticTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = self.clock.now();
        let expires_at = issued_at + Duration::hours(1);
        let mut issued = self.issued.lock().unwrap();
        let token = format!("token-{}", issued.len() + 1);
        issued.insert(
            token.clone(),
            AuthenticatedUser {
                id: subject.user_id,
                username: subject.username,
                is_superuser: subject.is_superuser,
                issued_at,
                expires_at,
            },
        );
        Ok(AuthTokenDto {
            token,
            issued_at,
            expires_at,
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.issued
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))
    }
}
