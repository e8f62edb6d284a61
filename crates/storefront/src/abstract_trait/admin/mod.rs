use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynAdminQueryRepository = Arc<dyn AdminQueryRepositoryTrait + Send + Sync>;

/// Membership check backing the admin gate. Deny-by-default: anything that is
/// not a positive lookup is treated as "not an admin" by the caller.
#[async_trait]
pub trait AdminQueryRepositoryTrait {
    async fn is_admin(&self, uid: &str) -> Result<bool, RepositoryError>;
}
