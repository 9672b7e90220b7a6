//! In-memory implementation of [`DeviceRepository`].

use std::collections::HashMap;
use std::future::Future;

use parking_lot::Mutex;

use hometrack_app::ports::DeviceRepository;
use hometrack_domain::device::Device;
use hometrack_domain::error::{HomeTrackError, NotFoundError};
use hometrack_domain::id::DeviceId;

fn not_found(id: DeviceId) -> HomeTrackError {
    NotFoundError {
        entity: "Device",
        id: id.to_string(),
    }
    .into()
}

/// Map-backed device repository.
#[derive(Debug, Default)]
pub struct InMemoryDeviceRepository {
    store: Mutex<HashMap<DeviceId, Device>>,
}

impl InMemoryDeviceRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeviceRepository for InMemoryDeviceRepository {
    fn create(&self, device: Device) -> impl Future<Output = Result<Device, HomeTrackError>> + Send {
        self.store.lock().insert(device.id, device.clone());
        async move { Ok(device) }
    }

    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, HomeTrackError>> + Send {
        let result = self.store.lock().get(&id).cloned();
        async move { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, HomeTrackError>> + Send {
        let result: Vec<Device> = self.store.lock().values().cloned().collect();
        async move { Ok(result) }
    }

    fn update(&self, device: Device) -> impl Future<Output = Result<Device, HomeTrackError>> + Send {
        let result = match self.store.lock().get_mut(&device.id) {
            Some(stored) => {
                *stored = device.clone();
                Ok(device)
            }
            None => Err(not_found(device.id)),
        };
        async move { result }
    }

    fn delete(&self, id: DeviceId) -> impl Future<Output = Result<(), HomeTrackError>> + Send {
        let result = match self.store.lock().remove(&id) {
            Some(_) => Ok(()),
            None => Err(not_found(id)),
        };
        async move { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hometrack_domain::device::{DeviceChanges, DeviceKind};

    #[tokio::test]
    async fn should_return_created_device_by_id() {
        let repo = InMemoryDeviceRepository::new();
        let device = Device::new(DeviceKind::Lock);
        let id = device.id;

        repo.create(device.clone()).await.unwrap();

        assert_eq!(repo.get_by_id(id).await.unwrap(), Some(device));
    }

    #[tokio::test]
    async fn should_return_none_when_device_missing() {
        let repo = InMemoryDeviceRepository::new();
        assert!(repo.get_by_id(DeviceId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_list_every_device() {
        let repo = InMemoryDeviceRepository::new();
        for kind in DeviceKind::ALL {
            repo.create(Device::new(kind)).await.unwrap();
        }
        assert_eq!(repo.get_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn should_replace_stored_device_on_update() {
        let repo = InMemoryDeviceRepository::new();
        let mut device = repo.create(Device::new(DeviceKind::Dimmer)).await.unwrap();
        device.modify(&DeviceChanges::new().with("brightness", 40));

        repo.update(device.clone()).await.unwrap();

        assert_eq!(repo.get_by_id(device.id).await.unwrap(), Some(device));
    }

    #[tokio::test]
    async fn should_fail_update_when_device_missing() {
        let repo = InMemoryDeviceRepository::new();
        let result = repo.update(Device::new(DeviceKind::Switch)).await;
        assert!(matches!(result, Err(HomeTrackError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_device() {
        let repo = InMemoryDeviceRepository::new();
        let device = repo.create(Device::new(DeviceKind::Switch)).await.unwrap();

        repo.delete(device.id).await.unwrap();

        assert!(repo.get_by_id(device.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_fail_delete_when_device_missing() {
        let repo = InMemoryDeviceRepository::new();
        let result = repo.delete(DeviceId::new()).await;
        assert!(matches!(result, Err(HomeTrackError::NotFound(_))));
    }
}
