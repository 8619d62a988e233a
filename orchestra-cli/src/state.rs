use anyhow::Context;
use orchestra_core::{DashboardConfig, FileStore, ProjectStore};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "orchestra.json";

pub struct AppState {
    pub board: ProjectStore<FileStore>,
    pub config: DashboardConfig,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<DashboardConfig> {
    match path {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(DashboardConfig::default()),
    }
}

pub fn build_state(data: Option<PathBuf>, config: DashboardConfig) -> anyhow::Result<AppState> {
    let data = data.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
    let storage = FileStore::open(&data)
        .with_context(|| format!("opening data file {}", data.display()))?;
    let board = ProjectStore::open(storage, config.storage_key.clone())
        .with_context(|| format!("reading projects from {}", data.display()))?;
    tracing::debug!(path = %data.display(), projects = board.len(), "board loaded");
    Ok(AppState { board, config })
}
