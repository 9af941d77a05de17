use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub database: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl Health {
    pub fn is_healthy(&self) -> bool {
        self.status == "ok" && self.database == "conectado"
    }
}
