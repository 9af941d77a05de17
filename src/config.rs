use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub server_origin: String,
    pub notification_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Config {
            api_base_url: env::var("INVENTARIO_API_URL")
                .unwrap_or_else(|_| "http://localhost:5000/api".to_string()),
            server_origin: env::var("INVENTARIO_SERVER_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            notification_ttl_secs: env::var("INVENTARIO_NOTIFICATION_TTL")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .unwrap_or(3),
        }
    }
}
