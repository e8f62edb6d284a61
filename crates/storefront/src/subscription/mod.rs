use crate::domain::response::product::ProductResponse;
use tokio::sync::watch;

/// Push feed for the product list. Every delivery is a full replacement
/// snapshot of the active catalog; consumers swap their view state wholesale
/// rather than patching it.
#[derive(Clone)]
pub struct CatalogFeed {
    tx: watch::Sender<Vec<ProductResponse>>,
}

impl Default for CatalogFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFeed {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self { tx }
    }

    pub fn publish(&self, snapshot: Vec<ProductResponse>) {
        self.tx.send_replace(snapshot);
    }

    /// Scoped handle: dropping the subscription unsubscribes.
    pub fn subscribe(&self) -> CatalogSubscription {
        CatalogSubscription {
            rx: self.tx.subscribe(),
        }
    }
}

pub struct CatalogSubscription {
    rx: watch::Receiver<Vec<ProductResponse>>,
}

impl CatalogSubscription {
    /// Latest published snapshot.
    pub fn current(&self) -> Vec<ProductResponse> {
        self.rx.borrow().clone()
    }

    /// Waits for the next replacement snapshot. `None` once the feed owner
    /// has gone away.
    pub async fn changed(&mut self) -> Option<Vec<ProductResponse>> {
        match self.rx.changed().await {
            Ok(()) => Some(self.rx.borrow_and_update().clone()),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::response::product::ProductResponse;

    fn snapshot(ids: &[i32]) -> Vec<ProductResponse> {
        ids.iter()
            .map(|id| ProductResponse {
                id: *id,
                title: format!("product-{id}"),
                description: String::new(),
                price_cents: 1000,
                inventory: 1,
                images: vec![],
                is_active: true,
                created_at: None,
                updated_at: None,
            })
            .collect()
    }

    #[tokio::test]
    async fn deliveries_replace_the_previous_snapshot() {
        let feed = CatalogFeed::new();
        let mut sub = feed.subscribe();

        feed.publish(snapshot(&[1, 2]));
        let first = sub.changed().await.unwrap();
        assert_eq!(first.len(), 2);

        feed.publish(snapshot(&[3]));
        let second = sub.changed().await.unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].id, 3);
    }

    #[tokio::test]
    async fn late_subscribers_see_the_latest_snapshot() {
        let feed = CatalogFeed::new();
        feed.publish(snapshot(&[7]));

        let sub = feed.subscribe();
        assert_eq!(sub.current().len(), 1);
        assert_eq!(sub.current()[0].id, 7);
    }
}
