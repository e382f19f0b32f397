use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// Argon2id with the crate defaults; stored hashes are PHC strings.
#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

// Argon2 is deliberately slow; keep it off the async workers.
async fn off_runtime<T, F>(job: F) -> ApplicationResult<T>
where
    F: FnOnce() -> ApplicationResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|err| ApplicationError::infrastructure(format!("hashing task failed: {err}")))?
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let secret = password.to_owned();
        off_runtime(move || {
            let salt = SaltString::generate(&mut OsRng);
            let phc = Argon2::default()
                .hash_password(secret.as_bytes(), &salt)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
            Ok(phc.to_string())
        })
        .await
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let secret = password.to_owned();
        let stored = expected_hash.to_owned();
        off_runtime(move || {
            // An unparsable stored hash is a data problem, not a bad login.
            let parsed = PasswordHash::new(&stored)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
            Argon2::default()
                .verify_password(secret.as_bytes(), &parsed)
                .map_err(|_| ApplicationError::invalid_credentials())
        })
        .await
    }
}
