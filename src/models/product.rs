use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "precio", deserialize_with = "super::de_decimal")]
    pub price: f64,
    #[serde(rename = "stock_actual")]
    pub stock: i32,
    #[serde(rename = "stock_minimo")]
    pub min_stock: i32,
    #[serde(rename = "categoria_id", default)]
    pub category_id: Option<i64>,
    #[serde(rename = "categoria_nombre", default)]
    pub category_name: Option<String>,
    #[serde(rename = "imagen_url", default)]
    pub image_url: Option<String>,
}

impl Product {
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// Low stock includes out of stock: the threshold comparison is all
    /// the backend uses when raising alerts.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }

    /// Image reference, with empty strings treated as absent.
    pub fn image_ref(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_accepts_number_and_string() {
        let from_number: Product = serde_json::from_str(
            r#"{"id":1,"codigo":"P-1","nombre":"Cable","precio":10.5,"stock_actual":3,"stock_minimo":5}"#,
        )
        .unwrap();
        assert_eq!(from_number.price, 10.5);

        let from_string: Product = serde_json::from_str(
            r#"{"id":1,"codigo":"P-1","nombre":"Cable","precio":"10.50","stock_actual":3,"stock_minimo":5}"#,
        )
        .unwrap();
        assert_eq!(from_string.price, 10.5);
    }

    #[test]
    fn stock_thresholds() {
        let mut product: Product = serde_json::from_str(
            r#"{"id":1,"codigo":"P-1","nombre":"Cable","precio":"1.00","stock_actual":5,"stock_minimo":5}"#,
        )
        .unwrap();
        assert!(product.is_low_stock());
        assert!(!product.is_out_of_stock());

        product.stock = 0;
        assert!(product.is_out_of_stock());
        assert!(product.is_low_stock());

        product.stock = 6;
        assert!(!product.is_low_stock());
    }

    #[test]
    fn empty_image_url_is_absent() {
        let product: Product = serde_json::from_str(
            r#"{"id":1,"codigo":"P-1","nombre":"Cable","precio":1,"stock_actual":1,"stock_minimo":1,"imagen_url":""}"#,
        )
        .unwrap();
        assert!(product.image_ref().is_none());
    }
}
