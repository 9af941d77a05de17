mod alert;
mod category;
mod health;
mod product;

pub use alert::{Alert, AlertKind};
pub use category::Category;
pub use health::Health;
pub use product::Product;

use serde::{Deserialize, Deserializer};

/// MySQL DECIMAL columns reach the wire as JSON strings, numeric columns as
/// numbers. Accept both.
pub(crate) fn de_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// TINYINT(1) flags reach the wire as 0/1 rather than true/false.
pub(crate) fn de_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Bool(b) => Ok(b),
        Raw::Int(n) => Ok(n != 0),
    }
}
