//! 作品目录加载

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use portfolio_core::SectorCatalog;

use crate::backend::AppConfig;

/// 按配置加载目录：未指定文件时使用内置目录
pub fn load_catalog(config: &AppConfig) -> Result<SectorCatalog> {
    match &config.sectors {
        Some(path) => load_from_file(path),
        None => Ok(SectorCatalog::builtin()),
    }
}

fn load_from_file(path: &Path) -> Result<SectorCatalog> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let catalog = SectorCatalog::from_json(&content)
        .with_context(|| format!("invalid sector catalog {}", path.display()))?;
    tracing::info!("Loaded {} sectors from {}", catalog.len(), path.display());
    Ok(catalog)
}
