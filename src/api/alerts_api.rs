use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::http_client::HttpClient;
use crate::models::Alert;

#[derive(Debug, Deserialize)]
pub struct AlertListEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "alertas", default)]
    pub alerts: Vec<Alert>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MarkReadEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "mensaje", default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct AlertsApi {
    http: HttpClient,
    base_url: String,
}

impl AlertsApi {
    pub(crate) fn new(http: HttpClient, base_url: String) -> Self {
        Self { http, base_url }
    }

    pub async fn list_envelope(&self) -> AppResult<AlertListEnvelope> {
        let url = format!("{}/alertas", self.base_url);
        Ok(self.http.get_json(&url).await?)
    }

    pub async fn list(&self) -> AppResult<Vec<Alert>> {
        let envelope = self.list_envelope().await?;
        if envelope.success {
            Ok(envelope.alerts)
        } else {
            Err(AppError::Api(envelope.error.unwrap_or_else(|| {
                "Error cargando alertas".to_string()
            })))
        }
    }

    pub async fn mark_read(&self, id: i64) -> AppResult<MarkReadEnvelope> {
        let url = format!("{}/alertas/{}/leer", self.base_url, id);
        let envelope: MarkReadEnvelope = self.http.put_empty(&url).await?;
        if envelope.success {
            Ok(envelope)
        } else {
            Err(AppError::Api(envelope.error.unwrap_or_else(|| {
                "Error marcando alerta".to_string()
            })))
        }
    }
}
