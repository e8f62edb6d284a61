mod common;

use common::*;
use prometheus_client::registry::Registry;
use shared::errors::{RepositoryError, ServiceError};
use std::{sync::Arc, sync::atomic::Ordering, time::Duration};
use storefront::{
    abstract_trait::order::service::{OrderCommandServiceTrait, OrderQueryServiceTrait},
    domain::requests::order::{CreateOrderRequest, FindAllOrders},
    service::order::{OrderCommandService, OrderQueryService},
};

fn order_services(repo: Arc<MockOrderRepository>) -> (OrderCommandService, OrderQueryService) {
    let mut registry = Registry::default();
    let command = OrderCommandService::new(repo.clone(), &mut registry);
    let query = OrderQueryService::new(repo, &mut registry);
    (command, query)
}

#[tokio::test]
async fn create_order_starts_in_the_new_state() {
    let repo = Arc::new(MockOrderRepository::new());
    let (command, _) = order_services(repo.clone());

    let response = command
        .create_order(&CreateOrderRequest {
            product_id: 3,
            email: "customer@example.com".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.data.status, "new");
    assert_eq!(response.data.product_id, 3);
    assert!(response.data.processed_at.is_none());
}

#[tokio::test]
async fn create_order_rejects_invalid_email_before_any_io() {
    let repo = Arc::new(MockOrderRepository::new());
    let (command, _) = order_services(repo.clone());

    let err = command
        .create_order(&CreateOrderRequest {
            product_id: 3,
            email: "not-an-email".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(repo.write_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn mark_processed_twice_keeps_the_later_stamp() {
    let repo = Arc::new(MockOrderRepository::new());
    let (command, _) = order_services(repo.clone());

    let created = command
        .create_order(&CreateOrderRequest {
            product_id: 1,
            email: "customer@example.com".to_string(),
        })
        .await
        .unwrap();

    command.mark_processed(created.data.id).await.unwrap();
    let first = repo.get(created.data.id).unwrap().processed_at.unwrap();

    tokio::time::sleep(Duration::from_millis(5)).await;

    command.mark_processed(created.data.id).await.unwrap();
    let stored = repo.get(created.data.id).unwrap();

    assert_eq!(stored.status, "processed");
    assert!(stored.processed_at.unwrap() > first);
}

#[tokio::test]
async fn mark_processed_of_missing_order_is_not_found() {
    let repo = Arc::new(MockOrderRepository::new());
    let (command, _) = order_services(repo);

    let err = command.mark_processed(404).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Repo(RepositoryError::NotFound)
    ));
}

#[tokio::test]
async fn orders_list_is_newest_first() {
    let repo = Arc::new(MockOrderRepository::new());
    let (command, query) = order_services(repo);

    for i in 1..=3 {
        command
            .create_order(&CreateOrderRequest {
                product_id: i,
                email: format!("customer{i}@example.com"),
            })
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(2)).await;
    }

    let response = query.find_all(&FindAllOrders::default()).await.unwrap();

    assert_eq!(response.pagination.total_items, 3);
    let ids: Vec<i32> = response.data.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}
