use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use kernel::interface::auth::{Authenticator, DependOnAuthenticator};
use kernel::prelude::entity::{Admin, Caller};
use kernel::KernelError;

use crate::error::ErrorStatus;

/// Any caller holding a valid bearer token.
pub struct AuthenticatedCaller(pub Caller);

/// A caller that passed the admin check.
pub struct AdminCaller(pub Admin);

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for AuthenticatedCaller
where
    S: DependOnAuthenticator + Send + Sync,
{
    type Rejection = ErrorStatus;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    tracing::debug!(%rejection, "no usable bearer token");
                    ErrorStatus::new(KernelError::Unauthorized, "Unauthorized access")
                })?;
        let caller = state.authenticator().authenticate(bearer.token()).await?;
        Ok(Self(caller))
    }
}

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for AdminCaller
where
    S: DependOnAuthenticator + Send + Sync,
{
    type Rejection = ErrorStatus;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthenticatedCaller(caller) =
            AuthenticatedCaller::from_request_parts(parts, state).await?;
        Ok(Self(caller.admin()?))
    }
}
