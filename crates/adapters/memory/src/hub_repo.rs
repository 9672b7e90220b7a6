//! In-memory implementation of [`HubRepository`].

use std::collections::HashMap;
use std::future::Future;

use parking_lot::Mutex;

use hometrack_app::ports::HubRepository;
use hometrack_domain::error::HomeTrackError;
use hometrack_domain::hub::Hub;
use hometrack_domain::id::HubId;

/// Map-backed hub repository.
#[derive(Debug, Default)]
pub struct InMemoryHubRepository {
    store: Mutex<HashMap<HubId, Hub>>,
}

impl InMemoryHubRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HubRepository for InMemoryHubRepository {
    fn create(&self, hub: Hub) -> impl Future<Output = Result<Hub, HomeTrackError>> + Send {
        self.store.lock().insert(hub.id, hub);
        async move { Ok(hub) }
    }

    fn get_by_id(
        &self,
        id: HubId,
    ) -> impl Future<Output = Result<Option<Hub>, HomeTrackError>> + Send {
        let result = self.store.lock().get(&id).copied();
        async move { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Hub>, HomeTrackError>> + Send {
        let result: Vec<Hub> = self.store.lock().values().copied().collect();
        async move { Ok(result) }
    }
}
