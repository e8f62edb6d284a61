#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use prometheus_client::registry::Registry;
use shared::errors::{RepositoryError, StorageError};
use std::{
    collections::{HashMap, HashSet},
    sync::{
        Mutex,
        atomic::{AtomicI32, AtomicUsize, Ordering},
    },
};
use storefront::{
    abstract_trait::{
        order::repository::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
        product::repository::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
        storage::ObjectStoreTrait,
    },
    domain::requests::{
        order::{CreateOrderRequest, FindAllOrders},
        product::{CreateProductRecordRequest, FindAllProducts, UpdateProductRecordRequest},
    },
    model::{order::Order, product::Product},
    service::product::{ProductCommandService, ProductQueryService},
    subscription::CatalogFeed,
};

pub fn active_product(id: i32, title: &str) -> Product {
    Product {
        product_id: id,
        title: title.to_string(),
        description: String::new(),
        price_cents: 1999,
        inventory: 3,
        images: vec![],
        is_active: true,
        created_at: Some(Utc::now()),
        updated_at: Some(Utc::now()),
        deleted_at: None,
    }
}

pub fn archived_product(id: i32, days_ago: i64, images: Vec<String>) -> Product {
    Product {
        images,
        is_active: false,
        deleted_at: Some(Utc::now() - Duration::days(days_ago)),
        ..active_product(id, &format!("archived-{id}"))
    }
}

#[derive(Default)]
pub struct MockProductRepository {
    pub products: Mutex<HashMap<i32, Product>>,
    pub next_id: AtomicI32,
    pub write_calls: AtomicUsize,
    pub fail_delete_ids: Mutex<HashSet<i32>>,
}

impl MockProductRepository {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI32::new(1),
            ..Default::default()
        }
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        let repo = Self::new();
        let max_id = products.iter().map(|p| p.product_id).max().unwrap_or(0);
        repo.next_id.store(max_id + 1, Ordering::SeqCst);
        *repo.products.lock().unwrap() = products
            .into_iter()
            .map(|p| (p.product_id, p))
            .collect();
        repo
    }

    pub fn get(&self, id: i32) -> Option<Product> {
        self.products.lock().unwrap().get(&id).cloned()
    }

    pub fn ids(&self) -> Vec<i32> {
        let mut ids: Vec<i32> = self.products.lock().unwrap().keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn fail_delete_of(&self, id: i32) {
        self.fail_delete_ids.lock().unwrap().insert(id);
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for MockProductRepository {
    async fn find_catalog(
        &self,
        _req: &FindAllProducts,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        let mut products: Vec<Product> = self
            .products
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.deleted_at.is_none() && p.inventory > 0)
            .cloned()
            .collect();
        products.sort_by_key(|p| std::cmp::Reverse(p.created_at));
        let total = products.len() as i64;
        Ok((products, total))
    }

    async fn find_active(
        &self,
        _req: &FindAllProducts,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        let products: Vec<Product> = self
            .products
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.deleted_at.is_none())
            .cloned()
            .collect();
        let total = products.len() as i64;
        Ok((products, total))
    }

    async fn find_archived(
        &self,
        _req: &FindAllProducts,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        let products: Vec<Product> = self
            .products
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.deleted_at.is_some())
            .cloned()
            .collect();
        let total = products.len() as i64;
        Ok((products, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        Ok(self.get(id))
    }

    async fn find_purge_eligible(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let mut products: Vec<Product> = self
            .products
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.deleted_at.is_some_and(|stamp| stamp <= cutoff))
            .cloned()
            .collect();
        products.sort_by_key(|p| p.deleted_at);
        Ok(products)
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for MockProductRepository {
    async fn create_product(
        &self,
        req: &CreateProductRecordRequest,
    ) -> Result<Product, RepositoryError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let product = Product {
            product_id: id,
            title: req.title.clone(),
            description: req.description.clone(),
            price_cents: req.price_cents,
            inventory: req.inventory,
            images: req.images.clone(),
            is_active: true,
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
            deleted_at: None,
        };
        self.products.lock().unwrap().insert(id, product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        req: &UpdateProductRecordRequest,
    ) -> Result<Product, RepositoryError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);

        let mut products = self.products.lock().unwrap();
        let product = products
            .get_mut(&req.product_id)
            .ok_or(RepositoryError::NotFound)?;

        product.title = req.title.clone();
        product.description = req.description.clone();
        product.price_cents = req.price_cents;
        product.inventory = req.inventory;
        if let Some(images) = &req.images {
            product.images = images.clone();
        }
        match req.is_active {
            Some(true) => {
                product.is_active = true;
                product.deleted_at = None;
            }
            Some(false) => {
                product.is_active = false;
                product.deleted_at = product.deleted_at.or_else(|| Some(Utc::now()));
            }
            None => {}
        }
        product.updated_at = Some(Utc::now());

        Ok(product.clone())
    }

    async fn archive_product(&self, id: i32) -> Result<Product, RepositoryError> {
        let mut products = self.products.lock().unwrap();
        let product = products.get_mut(&id).ok_or(RepositoryError::NotFound)?;

        product.deleted_at = Some(Utc::now());
        product.is_active = false;

        Ok(product.clone())
    }

    async fn restore_product(&self, id: i32) -> Result<Product, RepositoryError> {
        let mut products = self.products.lock().unwrap();
        let product = products
            .get_mut(&id)
            .filter(|p| p.deleted_at.is_some())
            .ok_or(RepositoryError::NotFound)?;

        product.deleted_at = None;
        product.is_active = true;

        Ok(product.clone())
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        if self.fail_delete_ids.lock().unwrap().contains(&id) {
            return Err(RepositoryError::Custom("injected delete failure".into()));
        }

        let mut products = self.products.lock().unwrap();
        let archived = products
            .get(&id)
            .is_some_and(|p| p.deleted_at.is_some());
        if !archived {
            return Err(RepositoryError::NotFound);
        }

        products.remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockObjectStore {
    pub put_calls: Mutex<Vec<String>>,
    pub delete_calls: Mutex<Vec<String>>,
    pub fail_puts: bool,
    pub fail_deletes: bool,
}

impl MockObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_puts() -> Self {
        Self {
            fail_puts: true,
            ..Self::default()
        }
    }

    pub fn failing_deletes() -> Self {
        Self {
            fail_deletes: true,
            ..Self::default()
        }
    }

    pub fn puts(&self) -> Vec<String> {
        self.put_calls.lock().unwrap().clone()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.delete_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStoreTrait for MockObjectStore {
    async fn put(&self, key: &str, _bytes: &[u8]) -> Result<String, StorageError> {
        if self.fail_puts {
            return Err(StorageError::Io(std::io::Error::other("injected")));
        }
        self.put_calls.lock().unwrap().push(key.to_string());
        Ok(format!("http://store.test/media/{key}"))
    }

    async fn delete(&self, locator: &str) -> Result<(), StorageError> {
        self.delete_calls.lock().unwrap().push(locator.to_string());
        if self.fail_deletes {
            return Err(StorageError::Io(std::io::Error::other("injected")));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MockOrderRepository {
    pub orders: Mutex<HashMap<i32, Order>>,
    pub next_id: AtomicI32,
    pub write_calls: AtomicUsize,
}

impl MockOrderRepository {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI32::new(1),
            ..Default::default()
        }
    }

    pub fn get(&self, id: i32) -> Option<Order> {
        self.orders.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for MockOrderRepository {
    async fn find_all(&self, _req: &FindAllOrders) -> Result<(Vec<Order>, i64), RepositoryError> {
        let mut orders: Vec<Order> = self.orders.lock().unwrap().values().cloned().collect();
        orders.sort_by_key(|o| std::cmp::Reverse(o.created_at));
        let total = orders.len() as i64;
        Ok((orders, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        Ok(self.get(id))
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for MockOrderRepository {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<Order, RepositoryError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let order = Order {
            order_id: id,
            product_id: req.product_id,
            email: req.email.clone(),
            status: "new".to_string(),
            created_at: Some(Utc::now()),
            processed_at: None,
        };
        self.orders.lock().unwrap().insert(id, order.clone());
        Ok(order)
    }

    async fn mark_processed(&self, id: i32) -> Result<Order, RepositoryError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);

        let mut orders = self.orders.lock().unwrap();
        let order = orders.get_mut(&id).ok_or(RepositoryError::NotFound)?;

        order.status = "processed".to_string();
        order.processed_at = Some(Utc::now());

        Ok(order.clone())
    }
}

pub fn product_services(
    repo: std::sync::Arc<MockProductRepository>,
    store: std::sync::Arc<MockObjectStore>,
) -> (ProductCommandService, ProductQueryService) {
    let mut registry = Registry::default();

    let command = ProductCommandService::new(
        repo.clone(),
        repo.clone(),
        store,
        CatalogFeed::new(),
        7,
        &mut registry,
    );
    let query = ProductQueryService::new(repo, &mut registry);

    (command, query)
}
