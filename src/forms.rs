use std::path::{Path, PathBuf};

use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::models::Product;

pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Extension set accepted by the backend's upload handler.
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Submit target for the shared product form. The mode is read at submit
/// time instead of rebinding any handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(i64),
}

/// In-memory mirror of the product form. Text inputs stay strings the way
/// the backend receives them; only the attached file is typed.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub code: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub min_stock: String,
    pub category_id: String,
    pub image_url: String,
    image_file: Option<PathBuf>,
}

impl ProductForm {
    /// Pre-fill for edit mode from a cached product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            code: product.code.clone(),
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            min_stock: product.min_stock.to_string(),
            category_id: product.category_id.map(|id| id.to_string()).unwrap_or_default(),
            image_url: product.image_url.clone().unwrap_or_default(),
            image_file: None,
        }
    }

    /// Required-field check; runs before any request is built.
    pub fn validate(&self) -> AppResult<()> {
        let missing = self.code.trim().is_empty()
            || self.name.trim().is_empty()
            || self.price.trim().is_empty();
        if missing {
            return Err(AppError::Validation(
                "Por favor completa todos los campos requeridos".to_string(),
            ));
        }
        Ok(())
    }

    pub fn image_file(&self) -> Option<&Path> {
        self.image_file.as_deref()
    }

    pub fn has_image_file(&self) -> bool {
        self.image_file.is_some()
    }

    /// Attach a local image. A rejected file leaves the selection cleared.
    pub fn attach_image_file(&mut self, path: impl Into<PathBuf>) -> AppResult<()> {
        self.image_file = None;
        let path = path.into();

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        if !ALLOWED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            return Err(AppError::UnsupportedFileType(extension));
        }

        if std::fs::metadata(&path)?.len() > MAX_IMAGE_BYTES {
            return Err(AppError::FileTooLarge);
        }

        self.image_file = Some(path);
        Ok(())
    }

    pub fn clear_image_file(&mut self) {
        self.image_file = None;
    }

    fn text_fields(&self) -> [(&'static str, &str); 8] {
        [
            ("codigo", &self.code),
            ("nombre", &self.name),
            ("descripcion", &self.description),
            ("precio", &self.price),
            ("stock_actual", &self.stock),
            ("stock_minimo", &self.min_stock),
            ("categoria_id", &self.category_id),
            ("imagen_url", &self.image_url),
        ]
    }

    /// JSON body for the URL-only path: empty fields are omitted entirely.
    pub fn json_payload(&self) -> Value {
        let mut payload = Map::new();
        for (key, value) in self.text_fields() {
            if !value.is_empty() {
                payload.insert(key.to_string(), Value::String(value.to_string()));
            }
        }
        Value::Object(payload)
    }

    /// Multipart body for the file path: all text parts plus the file.
    pub async fn multipart_body(&self) -> AppResult<Form> {
        let mut form = Form::new();
        for (key, value) in self.text_fields() {
            form = form.text(key, value.to_string());
        }

        if let Some(path) = &self.image_file {
            let data = tokio::fs::read(path).await?;
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("imagen")
                .to_string();
            form = form.part("imagen_archivo", Part::bytes(data).file_name(file_name));
        }

        Ok(form)
    }
}
