use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    #[serde(rename = "stock_bajo")]
    LowStock,
    #[serde(rename = "stock_agotado")]
    OutOfStock,
}

impl AlertKind {
    pub fn label(&self) -> &'static str {
        match self {
            AlertKind::LowStock => "Stock Bajo",
            AlertKind::OutOfStock => "Stock Agotado",
        }
    }
}

/// Backend-generated stock notice, denormalized with the product it
/// belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: i64,
    #[serde(rename = "producto_id")]
    pub product_id: i64,
    #[serde(rename = "tipo_alerta")]
    pub kind: AlertKind,
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "fecha_alerta", default)]
    pub raised_at: Option<String>,
    #[serde(rename = "leida", deserialize_with = "super::de_flag", default)]
    pub read: bool,
    #[serde(rename = "producto_nombre")]
    pub product_name: String,
    #[serde(rename = "producto_codigo", default)]
    pub product_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_flag_accepts_int_and_bool() {
        let raw = r#"{"id":1,"producto_id":2,"tipo_alerta":"stock_bajo","mensaje":"m","fecha_alerta":"2025-08-01 10:00:00","leida":1,"producto_nombre":"Cable","producto_codigo":"P-1"}"#;
        let alert: Alert = serde_json::from_str(raw).unwrap();
        assert!(alert.read);
        assert_eq!(alert.kind, AlertKind::LowStock);

        let raw = raw.replace("\"leida\":1", "\"leida\":false");
        let alert: Alert = serde_json::from_str(&raw).unwrap();
        assert!(!alert.read);
    }

    #[test]
    fn kind_parses_both_variants() {
        assert_eq!(
            serde_json::from_str::<AlertKind>("\"stock_agotado\"").unwrap(),
            AlertKind::OutOfStock
        );
        assert_eq!(AlertKind::OutOfStock.label(), "Stock Agotado");
    }
}
