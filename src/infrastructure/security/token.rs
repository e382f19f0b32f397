// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::{security::TokenManager, time::Clock},
};
use crate::infrastructure::security::claims::parse_claims;
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::Duration;
use std::{collections::HashMap, sync::Arc, time::SystemTime};

/// Authority block of every access token. Validity bounds are checked
/// against the `time` fact supplied by the verifier.
const ACCESS_TOKEN: &str = r#"
    user({uid}, {uname});
    superuser({su});
    issued_at({issued});
    expires_at({exp});
    check if time($now), $now >= {issued};
    check if time($now), $now <= {exp};
"#;

const VERIFIER: &str = r#"
    time({now});
    allow if user($id, $name);
"#;

fn infra(err: impl ToString) -> ApplicationError {
    ApplicationError::infrastructure(err.to_string())
}

fn denied(err: impl ToString) -> ApplicationError {
    ApplicationError::unauthorized(err.to_string())
}

/// Ed25519-signed Biscuit bearer tokens. Issue and verify share the
/// injected clock, so expiry follows the same notion of "now" as article
/// visibility.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl BiscuitTokenManager {
    pub fn new(
        private_key_hex: &str,
        ttl: std::time::Duration,
        clock: Arc<dyn Clock>,
    ) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| infra(format!("invalid token signing key: {err}")))?;
        let root = KeyPair::from(&private);
        let ttl = Duration::from_std(ttl).map_err(infra)?;

        Ok(Self {
            public: root.public(),
            root: Arc::new(root),
            ttl,
            clock,
        })
    }

    fn sign(
        &self,
        subject: &TokenSubject,
        issued: SystemTime,
        exp: SystemTime,
    ) -> ApplicationResult<String> {
        let params = HashMap::from([
            ("uid".to_string(), Term::from(i64::from(subject.user_id))),
            ("uname".to_string(), Term::from(subject.username.clone())),
            ("su".to_string(), Term::from(subject.is_superuser)),
            ("issued".to_string(), Term::from(issued)),
            ("exp".to_string(), Term::from(exp)),
        ]);

        Biscuit::builder()
            .code_with_params(ACCESS_TOKEN, params, HashMap::new())
            .map_err(infra)?
            .build(&self.root)
            .map_err(infra)?
            .seal()
            .map_err(infra)?
            .to_base64()
            .map_err(infra)
    }
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = self.clock.now();
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or_else(|| infra("token expiry out of range"))?;
        let token = self.sign(&subject, issued_at.into(), expires_at.into())?;

        tracing::debug!(user_id = %subject.user_id, "access token issued");
        Ok(AuthTokenDto {
            token,
            issued_at,
            expires_at,
            expires_in: self.ttl.num_seconds().max(0),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token.trim(), self.public).map_err(denied)?;

        let now: SystemTime = self.clock.now().into();
        let params = HashMap::from([("now".to_string(), Term::from(now))]);
        let mut authorizer = AuthorizerBuilder::new()
            .code_with_params(VERIFIER, params, HashMap::new())
            .map_err(infra)?
            .build(&biscuit)
            .map_err(denied)?;
        authorizer.authorize().map_err(denied)?;

        let (facts, _, _, _) = biscuit.authorizer().map_err(denied)?.dump();
        parse_claims(facts)
    }
}
