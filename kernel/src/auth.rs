use crate::entity::Caller;
use crate::KernelError;

/// Resolves the caller behind a request credential.
#[async_trait::async_trait]
pub trait Authenticator: 'static + Sync + Send {
    async fn authenticate(&self, token: &str) -> error_stack::Result<Caller, KernelError>;
}

pub trait DependOnAuthenticator: 'static + Sync + Send {
    type Authenticator: Authenticator;
    fn authenticator(&self) -> &Self::Authenticator;
}
