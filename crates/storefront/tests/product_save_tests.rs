mod common;

use common::*;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use shared::errors::ServiceError;
use std::{io::Cursor, sync::Arc, sync::atomic::Ordering};
use storefront::{
    abstract_trait::product::service::ProductCommandServiceTrait,
    domain::requests::product::{ImageUpload, SaveProductRequest},
};

fn save_request(title: &str, price_cents: i64) -> SaveProductRequest {
    SaveProductRequest {
        product_id: None,
        title: title.to_string(),
        description: "freshly cut".to_string(),
        price_cents,
        inventory: 5,
        is_active: None,
    }
}

fn png_upload() -> ImageUpload {
    let img = ImageBuffer::from_fn(64, 64, |x, y| {
        Rgb([(x * 4 % 251) as u8, (y * 4 % 241) as u8, ((x + y) % 239) as u8])
    });
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();

    ImageUpload {
        filename: "test.png".to_string(),
        content_type: "image/png".to_string(),
        bytes,
    }
}

#[tokio::test]
async fn negative_price_is_rejected_before_any_io() {
    let repo = Arc::new(MockProductRepository::new());
    let store = Arc::new(MockObjectStore::new());
    let (command, _) = product_services(repo.clone(), store.clone());

    let err = command
        .save_product(&save_request("roses", -1), Some(&png_upload()))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(repo.write_calls.load(Ordering::SeqCst), 0);
    assert!(store.puts().is_empty());
}

#[tokio::test]
async fn empty_title_is_rejected_before_any_io() {
    let repo = Arc::new(MockProductRepository::new());
    let store = Arc::new(MockObjectStore::new());
    let (command, _) = product_services(repo.clone(), store.clone());

    let err = command
        .save_product(&save_request("", 1000), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(repo.write_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn create_uploads_image_and_stores_its_locator() {
    let repo = Arc::new(MockProductRepository::new());
    let store = Arc::new(MockObjectStore::new());
    let (command, _) = product_services(repo.clone(), store.clone());

    let response = command
        .save_product(&save_request("peonies", 2499), Some(&png_upload()))
        .await
        .unwrap();

    let puts = store.puts();
    assert_eq!(puts.len(), 1);
    assert!(puts[0].starts_with("product_images/"));

    assert_eq!(response.data.images.len(), 1);
    assert!(response.data.images[0].starts_with("http://store.test/media/product_images/"));
    assert!(response.data.is_active);

    let stored = repo.get(response.data.id).unwrap();
    assert_eq!(stored.images, response.data.images);
}

#[tokio::test]
async fn upload_failure_aborts_the_save() {
    let repo = Arc::new(MockProductRepository::new());
    let store = Arc::new(MockObjectStore::failing_puts());
    let (command, _) = product_services(repo.clone(), store);

    let err = command
        .save_product(&save_request("orchids", 3500), Some(&png_upload()))
        .await
        .unwrap_err();

    // The record is never written when the blob it would point at is missing.
    assert!(matches!(err, ServiceError::Storage(_)));
    assert_eq!(repo.write_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn update_without_new_image_preserves_stored_locators() {
    let mut existing = active_product(1, "daisies");
    existing.images = vec!["http://store.test/media/product_images/old.jpg".to_string()];
    let repo = Arc::new(MockProductRepository::with_products(vec![existing.clone()]));
    let store = Arc::new(MockObjectStore::new());
    let (command, _) = product_services(repo.clone(), store.clone());

    let mut req = save_request("daisies (large)", 2999);
    req.product_id = Some(1);

    let response = command.save_product(&req, None).await.unwrap();

    assert_eq!(response.data.title, "daisies (large)");
    assert_eq!(response.data.images, existing.images);
    assert!(store.puts().is_empty());

    let stored = repo.get(1).unwrap();
    assert!(stored.is_active);
    assert_eq!(stored.images, existing.images);
}

#[tokio::test]
async fn update_preserves_activation_unless_overridden() {
    let repo = Arc::new(MockProductRepository::with_products(vec![archived_product(
        1,
        2,
        vec![],
    )]));
    let (command, _) = product_services(repo.clone(), Arc::new(MockObjectStore::new()));

    let mut req = save_request("still archived", 1500);
    req.product_id = Some(1);

    command.save_product(&req, None).await.unwrap();

    let stored = repo.get(1).unwrap();
    assert!(!stored.is_active);
    assert!(stored.deleted_at.is_some());

    let mut req = save_request("now active", 1500);
    req.product_id = Some(1);
    req.is_active = Some(true);

    command.save_product(&req, None).await.unwrap();

    let stored = repo.get(1).unwrap();
    assert!(stored.is_active);
    assert!(stored.deleted_at.is_none());
}

#[tokio::test]
async fn update_of_missing_product_is_not_found() {
    let repo = Arc::new(MockProductRepository::new());
    let (command, _) = product_services(repo, Arc::new(MockObjectStore::new()));

    let mut req = save_request("ghost", 100);
    req.product_id = Some(99);

    let err = command.save_product(&req, None).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Repo(shared::errors::RepositoryError::NotFound)
    ));
}
