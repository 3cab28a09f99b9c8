use crate::errors::ServiceError;
use crate::workshop::domain::Workshop;
use async_trait::async_trait;

/// Trait abstraction over the single-record workshop storage.
#[async_trait]
pub trait WorkshopRepository: Send + Sync {
    /// Snapshot of the current record.
    async fn get(&self) -> Workshop;
    /// Validate `candidate` and, if valid, overwrite the whole record with it.
    async fn replace(&self, candidate: Workshop) -> Result<Workshop, ServiceError>;
}
