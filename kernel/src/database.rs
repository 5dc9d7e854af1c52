use error_stack::Report;

use crate::KernelError;

#[async_trait::async_trait]
pub trait DatabaseConnection: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError>;
}

pub trait DependOnDatabaseConnection: 'static + Sync + Send {
    type DatabaseConnection: DatabaseConnection;
    fn database_connection(&self) -> &Self::DatabaseConnection;
}

impl<T> DependOnDatabaseConnection for T
where
    T: DatabaseConnection,
{
    type DatabaseConnection = T;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        self
    }
}

/// A unit of work against the store.
///
/// Implementations must discard uncommitted writes when dropped, so a
/// transaction abandoned on an early return never leaks partial state.
#[async_trait::async_trait]
pub trait Transaction: 'static + Send {
    async fn commit(self) -> error_stack::Result<(), KernelError>;
    async fn roll_back(self) -> error_stack::Result<(), KernelError>;

    /// Commits when `outcome` is `Ok`, rolls back otherwise.
    ///
    /// A failed roll back is appended to the original report instead of
    /// replacing it.
    async fn conclude<T>(
        self,
        outcome: error_stack::Result<T, KernelError>,
    ) -> error_stack::Result<T, KernelError>
    where
        Self: Sized,
        T: Send,
    {
        match outcome {
            Ok(value) => {
                self.commit().await?;
                Ok(value)
            }
            Err(report) => Err(match self.roll_back().await {
                Ok(()) => report,
                Err(roll_back) => extend(report, roll_back),
            }),
        }
    }
}

fn extend(mut report: Report<KernelError>, other: Report<KernelError>) -> Report<KernelError> {
    report.extend_one(other);
    report
}
