use crate::{
    abstract_trait::{
        admin::DynAdminQueryRepository,
        inquiry::{DynInquiryRepository, DynInquiryService},
        order::{
            repository::{DynOrderCommandRepository, DynOrderQueryRepository},
            service::{DynOrderCommandService, DynOrderQueryService},
        },
        product::{
            repository::{DynProductCommandRepository, DynProductQueryRepository},
            service::{DynProductCommandService, DynProductQueryService},
        },
        review::{DynReviewRepository, DynReviewService},
        storage::DynObjectStore,
    },
    repository::{
        admin::AdminQueryRepository,
        inquiry::InquiryRepository,
        order::{OrderCommandRepository, OrderQueryRepository},
        product::{ProductCommandRepository, ProductQueryRepository},
        review::ReviewRepository,
    },
    service::{
        inquiry::InquiryService,
        order::{OrderCommandService, OrderQueryService},
        product::{ProductCommandService, ProductQueryService},
        review::ReviewService,
    },
    subscription::CatalogFeed,
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
    pub review_service: DynReviewService,
    pub inquiry_service: DynInquiryService,
    pub admin_query: DynAdminQueryRepository,
    pub catalog_feed: CatalogFeed,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .field("order_query", &"OrderQueryService")
            .field("order_command", &"OrderCommandService")
            .field("review_service", &"ReviewService")
            .field("inquiry_service", &"InquiryService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub storage: DynObjectStore,
    pub retention_days: i64,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps {
            pool,
            storage,
            retention_days,
        } = deps;

        let product_query_repo: DynProductQueryRepository =
            Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command_repo: DynProductCommandRepository =
            Arc::new(ProductCommandRepository::new(pool.clone()));
        let order_query_repo: DynOrderQueryRepository =
            Arc::new(OrderQueryRepository::new(pool.clone()));
        let order_command_repo: DynOrderCommandRepository =
            Arc::new(OrderCommandRepository::new(pool.clone()));
        let review_repo: DynReviewRepository = Arc::new(ReviewRepository::new(pool.clone()));
        let inquiry_repo: DynInquiryRepository = Arc::new(InquiryRepository::new(pool.clone()));
        let admin_query: DynAdminQueryRepository = Arc::new(AdminQueryRepository::new(pool));

        let catalog_feed = CatalogFeed::new();

        let product_query: DynProductQueryService = Arc::new(ProductQueryService::new(
            product_query_repo.clone(),
            registry,
        ));

        let product_command: DynProductCommandService = Arc::new(ProductCommandService::new(
            product_query_repo,
            product_command_repo,
            storage,
            catalog_feed.clone(),
            retention_days,
            registry,
        ));

        let order_query: DynOrderQueryService =
            Arc::new(OrderQueryService::new(order_query_repo, registry));
        let order_command: DynOrderCommandService =
            Arc::new(OrderCommandService::new(order_command_repo, registry));

        let review_service: DynReviewService = Arc::new(ReviewService::new(review_repo, registry));
        let inquiry_service: DynInquiryService =
            Arc::new(InquiryService::new(inquiry_repo, registry));

        Self {
            product_query,
            product_command,
            order_query,
            order_command,
            review_service,
            inquiry_service,
            admin_query,
            catalog_feed,
        }
    }
}
