mod common;

use std::sync::Arc;

use application::{DeliveryService, PackageService, SubmitDelivery};
use chrono::Utc;
use common::{InMemoryDeliveries, InMemoryPackages, MemoryMedia};
use domain::{
    Agent, Coordinates, DeliveryRepository, DomainError, NewPackage, PackageRepository,
    PackageStatus,
};

fn agent(id: i32) -> Agent {
    Agent {
        id,
        username: format!("agent-{id}"),
        password_hash: "x".to_string(),
        full_name: None,
        created_at: Utc::now(),
    }
}

fn submission(package_id: i32, notes: Option<&str>) -> SubmitDelivery {
    SubmitDelivery {
        package_id,
        coordinates: Coordinates::new(19.4326, -99.1332).unwrap(),
        notes: notes.map(str::to_string),
        file_name: "door.jpg".to_string(),
        contents: vec![0xFF, 0xD8, 0xFF],
    }
}

#[tokio::test]
async fn test_submit_marks_package_delivered() {
    let packages = Arc::new(InMemoryPackages::default());
    let deliveries = Arc::new(InMemoryDeliveries::new(packages.clone()));
    let media = Arc::new(MemoryMedia::default());
    let service = DeliveryService::new(deliveries.clone(), media.clone());

    let pkg = packages
        .insert(NewPackage::new("PKG-1", "Calle 5 #10").assigned_to(1))
        .await
        .unwrap();

    let delivery = service
        .submit(&agent(1), submission(pkg.id, Some("left at door")))
        .await
        .expect("Delivery should be recorded");

    assert_eq!(delivery.package_id, pkg.id);
    assert_eq!(delivery.agent_id, 1);
    assert_eq!(delivery.notes.as_deref(), Some("left at door"));
    assert_eq!(delivery.coordinates.latitude(), 19.4326);
    assert_eq!(delivery.coordinates.longitude(), -99.1332);
    assert_eq!(delivery.photo_path, format!("media/{}_1_door.jpg", pkg.id));

    let reloaded = packages.find_by_id(pkg.id).await.unwrap().unwrap();
    assert_eq!(reloaded.status, PackageStatus::Delivered);

    let recorded = deliveries.find_by_package(pkg.id).await.unwrap();
    assert_eq!(recorded.len(), 1);
    assert!(media.files.lock().unwrap().contains_key(&format!("{}_1_door.jpg", pkg.id)));
}

#[tokio::test]
async fn test_submit_for_unknown_package_still_records() {
    let packages = Arc::new(InMemoryPackages::default());
    let deliveries = Arc::new(InMemoryDeliveries::new(packages.clone()));
    let service = DeliveryService::new(deliveries.clone(), Arc::new(MemoryMedia::default()));

    let delivery = service
        .submit(&agent(2), submission(999, None))
        .await
        .expect("Unknown package must not fail the submission");

    assert_eq!(delivery.package_id, 999);
    assert_eq!(deliveries.count(), 1);
    assert!(packages.find_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_failed_record_leaves_photo_behind() {
    let packages = Arc::new(InMemoryPackages::default());
    let deliveries = Arc::new(InMemoryDeliveries::failing(packages.clone()));
    let media = Arc::new(MemoryMedia::default());
    let service = DeliveryService::new(deliveries, media.clone());

    let err = service.submit(&agent(3), submission(5, None)).await.unwrap_err();
    assert!(matches!(err, DomainError::Database(_)));
    assert!(media.files.lock().unwrap().contains_key("5_3_door.jpg"));
}

#[tokio::test]
async fn test_repeated_submission_overwrites_same_photo_name() {
    let packages = Arc::new(InMemoryPackages::default());
    let deliveries = Arc::new(InMemoryDeliveries::new(packages.clone()));
    let media = Arc::new(MemoryMedia::default());
    let service = DeliveryService::new(deliveries.clone(), media.clone());

    service.submit(&agent(1), submission(7, None)).await.unwrap();
    let mut second = submission(7, None);
    second.contents = vec![1, 2, 3];
    service.submit(&agent(1), second).await.unwrap();

    assert_eq!(deliveries.count(), 2);
    let files = media.files.lock().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files.get("7_1_door.jpg"), Some(&vec![1, 2, 3]));
}

#[tokio::test]
async fn test_agent_without_packages_gets_empty_list() {
    let packages = Arc::new(InMemoryPackages::default());
    packages
        .insert(NewPackage::new("PKG-9", "Somewhere").assigned_to(2))
        .await
        .unwrap();
    let service = PackageService::new(packages);

    let list = service.packages_for_agent(1).await.unwrap();
    assert!(list.is_empty());
    assert_eq!(service.packages_for_agent(2).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_package_lookup_by_uid() {
    let packages = Arc::new(InMemoryPackages::default());
    packages
        .insert(NewPackage::new("PKG-UID-1", "Somewhere"))
        .await
        .unwrap();
    let service = PackageService::new(packages);

    assert_eq!(service.package_by_uid("PKG-UID-1").await.unwrap().id, 1);
    assert!(matches!(
        service.package_by_uid("missing").await,
        Err(DomainError::NotFound(_))
    ));
    assert!(matches!(service.package(42).await, Err(DomainError::NotFound(_))));
}
