use error_stack::ResultExt;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kernel::interface::auth::Authenticator;
use kernel::prelude::entity::{Caller, CallerId, IsAdmin};
use kernel::{KernelError, PublicMessage};

use crate::env;

static JWT_SECRET: &str = "JWT_SECRET";

/// Claims carried by a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallerClaims {
    pub sub: Uuid,
    #[serde(default)]
    pub is_admin: bool,
    pub exp: u64,
}

/// Verifies HS256 bearer tokens. Issuing tokens happens elsewhere.
pub struct JwtAuthenticator {
    key: DecodingKey,
    validation: Validation,
}

impl JwtAuthenticator {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        let secret = env(JWT_SECRET)?;
        Ok(Self::from_secret(secret.as_bytes()))
    }

    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            key: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

#[async_trait::async_trait]
impl Authenticator for JwtAuthenticator {
    async fn authenticate(&self, token: &str) -> error_stack::Result<Caller, KernelError> {
        let data = decode::<CallerClaims>(token, &self.key, &self.validation)
            .change_context(KernelError::Unauthorized)
            .attach_printable(PublicMessage::new("Invalid or expired token"))?;
        let claims = data.claims;
        Ok(Caller::new(
            CallerId::new(claims.sub),
            IsAdmin::new(claims.is_admin),
        ))
    }
}
