use reqwest::multipart::Form;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::http_client::HttpClient;
use crate::models::Product;

/// `GET /productos` response. Error responses carry no `success` member at
/// all, so every field defaults.
#[derive(Debug, Deserialize)]
pub struct ProductListEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "productos", default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SaveEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "producto", default)]
    pub product: Option<Product>,
    #[serde(rename = "mensaje", default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct ProductsApi {
    http: HttpClient,
    base_url: String,
}

impl ProductsApi {
    pub(crate) fn new(http: HttpClient, base_url: String) -> Self {
        Self { http, base_url }
    }

    fn collection_url(&self) -> String {
        format!("{}/productos", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/productos/{}", self.base_url, id)
    }

    /// Raw envelope, failing only on transport errors. The dashboard join
    /// needs this level: an unsuccessful envelope there skips a fragment
    /// instead of aborting the load.
    pub async fn list_envelope(&self) -> AppResult<ProductListEnvelope> {
        Ok(self.http.get_json(&self.collection_url()).await?)
    }

    pub async fn list(&self) -> AppResult<Vec<Product>> {
        let envelope = self.list_envelope().await?;
        if envelope.success {
            Ok(envelope.products)
        } else {
            Err(AppError::Api(envelope.error.unwrap_or_else(|| {
                "Error cargando productos".to_string()
            })))
        }
    }

    pub async fn create_json(&self, payload: &serde_json::Value) -> AppResult<SaveEnvelope> {
        let envelope: SaveEnvelope = self.http.post_json(&self.collection_url(), payload).await?;
        Self::checked(envelope, "Error creando producto")
    }

    pub async fn create_multipart(&self, form: Form) -> AppResult<SaveEnvelope> {
        let envelope: SaveEnvelope = self.http.post_multipart(&self.collection_url(), form).await?;
        Self::checked(envelope, "Error creando producto")
    }

    pub async fn update_json(&self, id: i64, payload: &serde_json::Value) -> AppResult<SaveEnvelope> {
        let envelope: SaveEnvelope = self.http.put_json(&self.item_url(id), payload).await?;
        Self::checked(envelope, "Error actualizando producto")
    }

    pub async fn update_multipart(&self, id: i64, form: Form) -> AppResult<SaveEnvelope> {
        let envelope: SaveEnvelope = self.http.put_multipart(&self.item_url(id), form).await?;
        Self::checked(envelope, "Error actualizando producto")
    }

    fn checked(envelope: SaveEnvelope, fallback: &str) -> AppResult<SaveEnvelope> {
        if envelope.success {
            Ok(envelope)
        } else {
            Err(AppError::Api(
                envelope.error.unwrap_or_else(|| fallback.to_string()),
            ))
        }
    }
}
