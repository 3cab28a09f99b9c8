use std::sync::Arc;

use async_trait::async_trait;
use configs::WorkshopConfig;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::errors::ServiceError;
use crate::workshop::domain::Workshop;
use crate::workshop::repository::WorkshopRepository;

/// In-memory holder of the single workshop record.
///
/// Reads clone a snapshot under the read lock; a replace swaps the whole record
/// under the write lock, so readers never see a half-written record.
pub struct WorkshopStore {
    inner: RwLock<Workshop>,
}

impl WorkshopStore {
    pub fn new(initial: Workshop) -> Arc<Self> {
        Arc::new(Self { inner: RwLock::new(initial) })
    }

    /// Store seeded with the built-in template and the startup score.
    pub fn seeded(cfg: &WorkshopConfig) -> Arc<Self> {
        Self::new(Workshop::from_config(cfg))
    }

    pub async fn get(&self) -> Workshop {
        self.inner.read().await.clone()
    }

    /// Full replace; the stored record is untouched when validation fails.
    pub async fn replace(&self, candidate: Workshop) -> Result<Workshop, ServiceError> {
        if let Err(e) = candidate.validate() {
            warn!(score = candidate.sweater_score, "rejected workshop replace");
            return Err(e);
        }
        let mut current = self.inner.write().await;
        *current = candidate;
        info!(
            name = %current.name,
            participants = current.participants.len(),
            score = current.sweater_score,
            "workshop replaced"
        );
        Ok(current.clone())
    }
}

#[async_trait]
impl WorkshopRepository for WorkshopStore {
    async fn get(&self) -> Workshop { self.get().await }
    async fn replace(&self, candidate: Workshop) -> Result<Workshop, ServiceError> { self.replace(candidate).await }
}
