use crate::error::AppResult;
use crate::http_client::HttpClient;
use crate::models::Health;

/// `GET /health` is the one endpoint without a success envelope: any
/// decodable body is a report, and transport failure means unreachable.
#[derive(Clone)]
pub struct HealthApi {
    http: HttpClient,
    base_url: String,
}

impl HealthApi {
    pub(crate) fn new(http: HttpClient, base_url: String) -> Self {
        Self { http, base_url }
    }

    pub async fn check(&self) -> AppResult<Health> {
        let url = format!("{}/health", self.base_url);
        Ok(self.http.get_json(&url).await?)
    }
}
