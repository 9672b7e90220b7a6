//! In-memory implementation of [`DwellingRepository`].

use std::collections::HashMap;
use std::future::Future;

use parking_lot::Mutex;

use hometrack_app::ports::DwellingRepository;
use hometrack_domain::dwelling::Dwelling;
use hometrack_domain::error::{HomeTrackError, NotFoundError};
use hometrack_domain::id::DwellingId;

/// Map-backed dwelling repository.
#[derive(Debug, Default)]
pub struct InMemoryDwellingRepository {
    store: Mutex<HashMap<DwellingId, Dwelling>>,
}

impl InMemoryDwellingRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DwellingRepository for InMemoryDwellingRepository {
    fn create(
        &self,
        dwelling: Dwelling,
    ) -> impl Future<Output = Result<Dwelling, HomeTrackError>> + Send {
        self.store.lock().insert(dwelling.id, dwelling.clone());
        async move { Ok(dwelling) }
    }

    fn get_by_id(
        &self,
        id: DwellingId,
    ) -> impl Future<Output = Result<Option<Dwelling>, HomeTrackError>> + Send {
        let result = self.store.lock().get(&id).cloned();
        async move { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Dwelling>, HomeTrackError>> + Send {
        let result: Vec<Dwelling> = self.store.lock().values().cloned().collect();
        async move { Ok(result) }
    }

    fn update(
        &self,
        dwelling: Dwelling,
    ) -> impl Future<Output = Result<Dwelling, HomeTrackError>> + Send {
        let result = match self.store.lock().get_mut(&dwelling.id) {
            Some(stored) => {
                *stored = dwelling.clone();
                Ok(dwelling)
            }
            None => Err(NotFoundError {
                entity: "Dwelling",
                id: dwelling.id.to_string(),
            }
            .into()),
        };
        async move { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_return_created_dwelling_by_id() {
        let repo = InMemoryDwellingRepository::new();
        let dwelling = repo.create(Dwelling::new()).await.unwrap();
        assert_eq!(repo.get_by_id(dwelling.id).await.unwrap(), Some(dwelling));
    }

    #[tokio::test]
    async fn should_persist_updated_occupancy() {
        let repo = InMemoryDwellingRepository::new();
        let mut dwelling = repo.create(Dwelling::new()).await.unwrap();
        dwelling.set_occupied(true);

        repo.update(dwelling.clone()).await.unwrap();

        let stored = repo.get_by_id(dwelling.id).await.unwrap().unwrap();
        assert!(stored.occupied);
    }

    #[tokio::test]
    async fn should_fail_update_when_dwelling_missing() {
        let repo = InMemoryDwellingRepository::new();
        let result = repo.update(Dwelling::new()).await;
        assert!(matches!(result, Err(HomeTrackError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_every_dwelling() {
        let repo = InMemoryDwellingRepository::new();
        repo.create(Dwelling::new()).await.unwrap();
        repo.create(Dwelling::new()).await.unwrap();
        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }
}
