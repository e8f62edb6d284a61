mod common;

use common::*;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;
use storefront::abstract_trait::product::service::ProductCommandServiceTrait;

#[tokio::test]
async fn archive_stamps_marker_and_clears_active_flag() {
    let repo = Arc::new(MockProductRepository::with_products(vec![active_product(
        1, "roses",
    )]));
    let (command, _) = product_services(repo.clone(), Arc::new(MockObjectStore::new()));

    let response = command.archive_product(1).await.unwrap();

    assert!(!response.data.is_active);
    assert!(response.data.deleted_at.is_some());

    // is_active is false iff deleted_at is set
    let stored = repo.get(1).unwrap();
    assert_eq!(stored.is_active, stored.deleted_at.is_none());
    assert!(stored.deleted_at.is_some());
}

#[tokio::test]
async fn archive_then_restore_round_trips_with_fields_intact() {
    let original = active_product(1, "tulips");
    let repo = Arc::new(MockProductRepository::with_products(vec![original.clone()]));
    let (command, _) = product_services(repo.clone(), Arc::new(MockObjectStore::new()));

    command.archive_product(1).await.unwrap();
    let response = command.restore_product(1).await.unwrap();

    assert!(response.data.is_active);

    let stored = repo.get(1).unwrap();
    assert!(stored.is_active);
    assert!(stored.deleted_at.is_none());
    assert_eq!(stored.title, original.title);
    assert_eq!(stored.price_cents, original.price_cents);
    assert_eq!(stored.inventory, original.inventory);
    assert_eq!(stored.images, original.images);
}

#[tokio::test]
async fn restore_of_active_product_is_not_found() {
    let repo = Arc::new(MockProductRepository::with_products(vec![active_product(
        1, "ferns",
    )]));
    let (command, _) = product_services(repo, Arc::new(MockObjectStore::new()));

    let err = command.restore_product(1).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Repo(RepositoryError::NotFound)
    ));
}

#[tokio::test]
async fn rearchiving_resets_the_purge_clock() {
    let repo = Arc::new(MockProductRepository::with_products(vec![archived_product(
        1,
        5,
        vec![],
    )]));
    let (command, _) = product_services(repo.clone(), Arc::new(MockObjectStore::new()));

    let first_stamp = repo.get(1).unwrap().deleted_at.unwrap();

    command.archive_product(1).await.unwrap();

    let second_stamp = repo.get(1).unwrap().deleted_at.unwrap();
    assert!(second_stamp > first_stamp);
}

#[tokio::test]
async fn purge_attempts_every_blob_and_deletes_the_record() {
    let images = vec![
        "http://store.test/media/product_images/a.jpg".to_string(),
        "http://store.test/media/product_images/b.jpg".to_string(),
        "http://store.test/media/product_images/c.jpg".to_string(),
    ];
    let repo = Arc::new(MockProductRepository::with_products(vec![archived_product(
        1,
        1,
        images.clone(),
    )]));
    let store = Arc::new(MockObjectStore::new());
    let (command, _) = product_services(repo.clone(), store.clone());

    command.purge_product(1).await.unwrap();

    assert_eq!(store.deletes(), images);
    assert!(repo.get(1).is_none());
}

#[tokio::test]
async fn purge_succeeds_even_when_every_blob_delete_fails() {
    let images = vec![
        "http://store.test/media/product_images/a.jpg".to_string(),
        "http://store.test/media/product_images/b.jpg".to_string(),
    ];
    let repo = Arc::new(MockProductRepository::with_products(vec![archived_product(
        1,
        1,
        images.clone(),
    )]));
    let store = Arc::new(MockObjectStore::failing_deletes());
    let (command, _) = product_services(repo.clone(), store.clone());

    command.purge_product(1).await.unwrap();

    // Every locator was still attempted, in order, before the record delete.
    assert_eq!(store.deletes(), images);
    assert!(repo.get(1).is_none());
}

#[tokio::test]
async fn purge_refuses_a_product_that_is_not_archived() {
    let repo = Arc::new(MockProductRepository::with_products(vec![active_product(
        1, "ivy",
    )]));
    let store = Arc::new(MockObjectStore::new());
    let (command, _) = product_services(repo.clone(), store.clone());

    let err = command.purge_product(1).await.unwrap_err();

    assert!(matches!(err, ServiceError::Custom(_)));
    assert!(repo.get(1).is_some());
    assert!(store.deletes().is_empty());
}

#[tokio::test]
async fn purge_of_missing_product_is_not_found() {
    let repo = Arc::new(MockProductRepository::new());
    let (command, _) = product_services(repo, Arc::new(MockObjectStore::new()));

    let err = command.purge_product(42).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Repo(RepositoryError::NotFound)
    ));
}

#[tokio::test]
async fn sweep_purges_only_records_past_the_retention_boundary() {
    let repo = Arc::new(MockProductRepository::with_products(vec![
        archived_product(3, 3, vec![]),
        archived_product(6, 6, vec![]),
        archived_product(7, 7, vec![]),
        archived_product(10, 10, vec![]),
    ]));
    let (command, _) = product_services(repo.clone(), Arc::new(MockObjectStore::new()));

    let purged = command.sweep_expired().await.unwrap();

    // Boundary is inclusive: exactly the 7- and 10-day-old records go.
    assert_eq!(purged, 2);
    assert_eq!(repo.ids(), vec![3, 6]);
}

#[tokio::test]
async fn sweep_continues_past_a_failing_candidate() {
    let repo = Arc::new(MockProductRepository::with_products(vec![
        archived_product(1, 8, vec![]),
        archived_product(2, 9, vec![]),
    ]));
    repo.fail_delete_of(2);
    let (command, _) = product_services(repo.clone(), Arc::new(MockObjectStore::new()));

    let purged = command.sweep_expired().await.unwrap();

    assert_eq!(purged, 1);
    assert_eq!(repo.ids(), vec![2]);
}

#[tokio::test]
async fn sweep_with_no_eligible_records_purges_nothing() {
    let repo = Arc::new(MockProductRepository::with_products(vec![
        active_product(1, "lilies"),
        archived_product(2, 3, vec![]),
    ]));
    let (command, _) = product_services(repo.clone(), Arc::new(MockObjectStore::new()));

    let purged = command.sweep_expired().await.unwrap();

    assert_eq!(purged, 0);
    assert_eq!(repo.ids(), vec![1, 2]);
}
