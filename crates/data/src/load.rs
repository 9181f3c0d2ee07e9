use crate::schema::{CatalogEntry, ServerConfig};
use anyhow::Context;
use qigua_core::{Catalog, Token};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CATALOG_FILE: &str = "catalog.json";
const SERVER_FILE: &str = "server.json";
const ASSETS_ENV: &str = "QIGUA_ASSETS";
const BIND_ENV: &str = "QIGUA_BIND";

/// Assets directory: `QIGUA_ASSETS` when set, else `./assets`.
pub fn assets_dir() -> PathBuf {
    std::env::var_os(ASSETS_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets"))
}

/// Loads `catalog.json` from `dir`, falling back to the built-in catalog when
/// the file is absent. A present but invalid file is an error.
pub fn load_catalog(dir: &Path) -> anyhow::Result<Catalog> {
    let path = dir.join(CATALOG_FILE);
    if !path.exists() {
        debug!(path = %path.display(), "no catalog file, using built-in set");
        return Ok(Catalog::standard().clone());
    }
    let entries: Vec<CatalogEntry> = load_json(&path)?;
    let catalog = catalog_from_entries(&entries)
        .with_context(|| format!("validate {}", path.display()))?;
    info!(path = %path.display(), tokens = catalog.len(), "loaded catalog");
    Ok(catalog)
}

pub fn parse_catalog(raw: &str) -> anyhow::Result<Catalog> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(raw).context("parse catalog")?;
    catalog_from_entries(&entries)
}

pub fn catalog_from_entries(entries: &[CatalogEntry]) -> anyhow::Result<Catalog> {
    let mut tokens = Vec::new();
    for entry in entries {
        for _ in 0..entry.copies {
            tokens.push(Token::new(entry.kind, entry.color, entry.points, entry.element));
        }
    }
    Ok(Catalog::from_tokens(tokens)?)
}

/// Loads `server.json` from `dir` (defaults when absent); `QIGUA_BIND` overrides the bind address.
pub fn load_server_config(dir: &Path) -> anyhow::Result<ServerConfig> {
    let path = dir.join(SERVER_FILE);
    let mut config = if path.exists() {
        load_json(&path)?
    } else {
        ServerConfig::default()
    };
    if let Ok(bind) = std::env::var(BIND_ENV) {
        config.bind = bind;
    }
    Ok(config)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
