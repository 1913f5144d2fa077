//! Web-specific asset loading.
//!
//! The dataset, model and config ship inside the wasm bundle, so loading
//! never touches the network.

use once_cell::sync::Lazy;
use salescast_core::{
    ConfigError, Dashboard, DashboardConfig, DataLoader, DatasetError, ForestModel, ModelError,
    SalesDataset,
};

const SALES_CSV: &str = include_str!("../static/data/sales.csv");
const MODEL_JSON: &str = include_str!("../static/data/model.json");
const CONFIG_JSON: &str = include_str!("../static/data/dashboard.json");

/// Data loader backed by assets embedded at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebDataLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl DataLoader for WebDataLoader {
    type Error = WebDataError;

    fn load_dataset(&self) -> Result<SalesDataset, Self::Error> {
        Ok(SalesDataset::from_csv_str(SALES_CSV)?)
    }

    fn load_model(&self) -> Result<ForestModel, Self::Error> {
        Ok(ForestModel::from_json(MODEL_JSON)?)
    }

    fn load_config(&self) -> Result<DashboardConfig, Self::Error> {
        Ok(DashboardConfig::from_json(CONFIG_JSON)?)
    }
}

static DASHBOARD: Lazy<Result<Dashboard, WebDataError>> = Lazy::new(|| {
    let loaded = Dashboard::from_loader(&WebDataLoader);
    if let Err(err) = &loaded {
        log::error!("failed to load dashboard assets: {err}");
    }
    loaded
});

/// Dashboard shared by every component, loaded on first use.
///
/// # Errors
///
/// Returns the load error when an embedded asset is invalid.
pub fn shared_dashboard() -> Result<&'static Dashboard, &'static WebDataError> {
    DASHBOARD.as_ref()
}

/// Slider and chart config, falling back to defaults when assets failed.
#[must_use]
pub fn dashboard_config() -> DashboardConfig {
    shared_dashboard().map_or_else(|_| DashboardConfig::default_config(), |dash| dash.config().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_assets_load() {
        let dash = shared_dashboard().expect("embedded assets are valid");
        assert!(!dash.dataset().is_empty());
        assert_eq!(dash.model().n_features, salescast_core::constants::FEATURE_WIDTH);
    }

    #[test]
    fn loader_reads_config() {
        let cfg = WebDataLoader.load_config().unwrap();
        assert!((cfg.price.default - 19.99).abs() < f64::EPSILON);
    }
}
