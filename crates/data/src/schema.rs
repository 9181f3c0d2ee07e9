use serde::{Deserialize, Serialize};

pub use qigua_core::{Color, Element, Kind};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub kind: Kind,
    pub color: Color,
    pub points: u32,
    pub element: Element,
    /// Copies of this kind in this color.
    pub copies: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default)]
    pub pretty: bool,
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_bind() -> String {
    "0.0.0.0:5000".to_string()
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            pretty: false,
            cors_origin: default_cors_origin(),
        }
    }
}
