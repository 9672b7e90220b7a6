//! Dwelling service — use-cases for dwellings.

use hometrack_domain::dwelling::Dwelling;
use hometrack_domain::error::{HomeTrackError, NotFoundError};
use hometrack_domain::id::{DwellingId, HubId};

use crate::ports::DwellingRepository;

/// Application service for dwelling occupancy and hub installation.
pub struct DwellingService<R> {
    repo: R,
}

impl<R: DwellingRepository> DwellingService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create and store a vacant dwelling with no hub.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_dwelling(&self) -> Result<Dwelling, HomeTrackError> {
        let dwelling = self.repo.create(Dwelling::new()).await?;
        tracing::info!(dwelling_id = %dwelling.id, "dwelling created");
        Ok(dwelling)
    }

    /// Look up a dwelling by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HomeTrackError::NotFound`] when no dwelling with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_dwelling(&self, id: DwellingId) -> Result<Dwelling, HomeTrackError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Dwelling",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Mark a dwelling as occupied.
    ///
    /// # Errors
    ///
    /// Returns [`HomeTrackError::NotFound`] when the dwelling does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn occupied(&self, id: DwellingId) -> Result<Dwelling, HomeTrackError> {
        self.set_occupied(id, true).await
    }

    /// Mark a dwelling as vacant.
    ///
    /// # Errors
    ///
    /// Returns [`HomeTrackError::NotFound`] when the dwelling does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn vacant(&self, id: DwellingId) -> Result<Dwelling, HomeTrackError> {
        self.set_occupied(id, false).await
    }

    /// Record `hub_id` as installed in a dwelling, replacing any previous hub.
    ///
    /// The hub id is stored as given; it is not checked against known hubs.
    ///
    /// # Errors
    ///
    /// Returns [`HomeTrackError::NotFound`] when the dwelling does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn install_hub(
        &self,
        id: DwellingId,
        hub_id: HubId,
    ) -> Result<Dwelling, HomeTrackError> {
        let mut dwelling = self.get_dwelling(id).await?;
        dwelling.install_hub(hub_id);
        let dwelling = self.repo.update(dwelling).await?;
        tracing::info!("hub installed");
        Ok(dwelling)
    }

    /// List all dwellings.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_dwellings(&self) -> Result<Vec<Dwelling>, HomeTrackError> {
        self.repo.get_all().await
    }

    async fn set_occupied(
        &self,
        id: DwellingId,
        occupied: bool,
    ) -> Result<Dwelling, HomeTrackError> {
        let mut dwelling = self.get_dwelling(id).await?;
        dwelling.set_occupied(occupied);
        let dwelling = self.repo.update(dwelling).await?;
        tracing::debug!(occupied, "occupancy updated");
        Ok(dwelling)
    }
}
