//! Dwelling service behaviour.

use hometrack_adapter_memory::InMemoryDwellingRepository;
use hometrack_app::services::dwelling_service::DwellingService;
use hometrack_domain::id::{DwellingId, HubId};

fn make_service() -> DwellingService<InMemoryDwellingRepository> {
    DwellingService::new(InMemoryDwellingRepository::new())
}

#[tokio::test]
async fn should_create_vacant_dwelling_without_hub() {
    let svc = make_service();
    let dwelling = svc.create_dwelling().await.unwrap();

    let fetched = svc.get_dwelling(dwelling.id).await.unwrap();
    assert!(!fetched.occupied);
    assert!(fetched.hub_id.is_none());
}

#[tokio::test]
async fn should_mark_occupied_then_vacant() {
    let svc = make_service();
    let dwelling = svc.create_dwelling().await.unwrap();

    assert!(svc.occupied(dwelling.id).await.unwrap().occupied);
    assert!(svc.get_dwelling(dwelling.id).await.unwrap().occupied);

    assert!(!svc.vacant(dwelling.id).await.unwrap().occupied);
    assert!(!svc.get_dwelling(dwelling.id).await.unwrap().occupied);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_dwelling() {
    let svc = make_service();
    let id = DwellingId::new();

    assert!(svc.get_dwelling(id).await.unwrap_err().is_not_found());
    assert!(svc.occupied(id).await.unwrap_err().is_not_found());
    assert!(svc.vacant(id).await.unwrap_err().is_not_found());
    assert!(svc.install_hub(id, HubId::new()).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn should_install_hub_without_checking_it_exists() {
    let svc = make_service();
    let dwelling = svc.create_dwelling().await.unwrap();
    let dangling = HubId::new();

    svc.install_hub(dwelling.id, dangling).await.unwrap();

    assert_eq!(svc.get_dwelling(dwelling.id).await.unwrap().hub_id, Some(dangling));
}

#[tokio::test]
async fn should_replace_installed_hub() {
    let svc = make_service();
    let dwelling = svc.create_dwelling().await.unwrap();
    let replacement = HubId::new();

    svc.install_hub(dwelling.id, HubId::new()).await.unwrap();
    svc.install_hub(dwelling.id, replacement).await.unwrap();

    assert_eq!(svc.get_dwelling(dwelling.id).await.unwrap().hub_id, Some(replacement));
}

#[tokio::test]
async fn should_list_every_dwelling() {
    let svc = make_service();
    svc.create_dwelling().await.unwrap();
    svc.create_dwelling().await.unwrap();

    assert_eq!(svc.list_dwellings().await.unwrap().len(), 2);
}
