//! Filesystem asset loading for the CLI.

use std::path::{Path, PathBuf};

use salescast_core::{
    ConfigError, DashboardConfig, DataLoader, DatasetError, ForestModel, ModelError, SalesDataset,
};

#[derive(Debug, thiserror::Error)]
pub enum FsDataError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("model {path}: {source}")]
    Model {
        path: String,
        #[source]
        source: ModelError,
    },
    #[error("config {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: ConfigError,
    },
}

/// Loads assets from paths given on the command line.
#[derive(Debug, Clone)]
pub struct FsDataLoader {
    pub data: PathBuf,
    pub model: PathBuf,
    /// Defaults are used when no config file is given.
    pub config: Option<PathBuf>,
}

fn read(path: &Path) -> Result<String, FsDataError> {
    std::fs::read_to_string(path).map_err(|source| FsDataError::Read {
        path: path.display().to_string(),
        source,
    })
}

impl DataLoader for FsDataLoader {
    type Error = FsDataError;

    fn load_dataset(&self) -> Result<SalesDataset, Self::Error> {
        Ok(SalesDataset::from_path(&self.data)?)
    }

    fn load_model(&self) -> Result<ForestModel, Self::Error> {
        let json = read(&self.model)?;
        ForestModel::from_json(&json).map_err(|source| FsDataError::Model {
            path: self.model.display().to_string(),
            source,
        })
    }

    fn load_config(&self) -> Result<DashboardConfig, Self::Error> {
        let Some(path) = &self.config else {
            return Ok(DashboardConfig::default_config());
        };
        let json = read(path)?;
        DashboardConfig::from_json(&json).map_err(|source| FsDataError::Config {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn static_data(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../salescast-web/static/data")
            .join(name)
    }

    #[test]
    fn loads_bundled_assets() {
        let loader = FsDataLoader {
            data: static_data("sales.csv"),
            model: static_data("model.json"),
            config: Some(static_data("dashboard.json")),
        };
        assert!(!loader.load_dataset().unwrap().is_empty());
        assert_eq!(loader.load_model().unwrap().n_features, 30);
        assert!(loader.load_config().is_ok());
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let loader = FsDataLoader {
            data: static_data("sales.csv"),
            model: static_data("model.json"),
            config: None,
        };
        assert_eq!(
            loader.load_config().unwrap(),
            DashboardConfig::default_config()
        );
    }

    #[test]
    fn missing_model_names_the_path() {
        let loader = FsDataLoader {
            data: static_data("sales.csv"),
            model: PathBuf::from("/nowhere/model.json"),
            config: None,
        };
        let err = loader.load_model().unwrap_err();
        assert!(err.to_string().contains("/nowhere/model.json"));
    }
}
