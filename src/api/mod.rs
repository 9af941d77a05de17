pub mod alerts_api;
pub mod categories_api;
pub mod health_api;
pub mod products_api;

pub use alerts_api::AlertsApi;
pub use categories_api::CategoriesApi;
pub use health_api::HealthApi;
pub use products_api::ProductsApi;

use crate::http_client::HttpClient;

/// One client per backend resource, all sharing the same connection pool
/// and base URL.
#[derive(Clone)]
pub struct ApiClient {
    pub health: HealthApi,
    pub products: ProductsApi,
    pub categories: CategoriesApi,
    pub alerts: AlertsApi,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        let http = HttpClient::new();
        let base_url = base_url.trim_end_matches('/').to_string();

        Self {
            health: HealthApi::new(http.clone(), base_url.clone()),
            products: ProductsApi::new(http.clone(), base_url.clone()),
            categories: CategoriesApi::new(http.clone(), base_url.clone()),
            alerts: AlertsApi::new(http, base_url),
        }
    }
}
