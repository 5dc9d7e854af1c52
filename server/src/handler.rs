use driver::auth::JwtAuthenticator;
use driver::database::PostgresDatabase;
use kernel::interface::auth::DependOnAuthenticator;
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Handler::init().await?.into())
    }
}

impl From<Handler> for AppModule {
    fn from(handler: Handler) -> Self {
        Self(Arc::new(handler))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

impl DependOnAuthenticator for AppModule {
    type Authenticator = JwtAuthenticator;
    fn authenticator(&self) -> &Self::Authenticator {
        &self.0.authenticator
    }
}

#[derive(References)]
pub struct Handler {
    pgpool: PostgresDatabase,
    authenticator: JwtAuthenticator,
}

impl Handler {
    pub fn new(pgpool: PostgresDatabase, authenticator: JwtAuthenticator) -> Self {
        Self {
            pgpool,
            authenticator,
        }
    }

    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let authenticator = JwtAuthenticator::new()?;
        let pgpool = PostgresDatabase::new().await?;
        Ok(Self::new(pgpool, authenticator))
    }
}
