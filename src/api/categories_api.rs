use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::http_client::HttpClient;
use crate::models::Category;

#[derive(Debug, Deserialize)]
pub struct CategoryListEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "categorias", default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct CategoriesApi {
    http: HttpClient,
    base_url: String,
}

impl CategoriesApi {
    pub(crate) fn new(http: HttpClient, base_url: String) -> Self {
        Self { http, base_url }
    }

    pub async fn list_envelope(&self) -> AppResult<CategoryListEnvelope> {
        let url = format!("{}/categorias", self.base_url);
        Ok(self.http.get_json(&url).await?)
    }

    pub async fn list(&self) -> AppResult<Vec<Category>> {
        let envelope = self.list_envelope().await?;
        if envelope.success {
            Ok(envelope.categories)
        } else {
            Err(AppError::Api(envelope.error.unwrap_or_else(|| {
                "Error cargando categorías".to_string()
            })))
        }
    }
}
