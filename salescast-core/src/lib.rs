//! Salescast Core
//!
//! Platform-agnostic logic behind the Salescast dashboard: turning control
//! values into model features, running the pre-fitted sales model and
//! assembling the comparison chart. No UI or platform dependencies.

pub mod catalog;
pub mod chart;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod echo;
pub mod encoder;
pub mod model;
pub mod numbers;
pub mod selection;

use log::debug;
use serde::Serialize;
use thiserror::Error;

// Re-export commonly used types
pub use catalog::{CatalogError, Category, CompanySize, Genre, PlatformTier, Rating};
pub use chart::{FigureSpec, HistogramBins, HistogramTrace, MarkerTrace, SalesWindow, Trace};
pub use config::{ChartStyle, ConfigError, DashboardConfig, SliderConfig};
pub use dataset::{DatasetError, SalesDataset, SalesRecord};
pub use echo::{ControlId, echo_for, echo_text};
pub use encoder::{
    EncodeError, FeatureBatch, FeatureRow, FeatureVector, encode, feature_names,
    missing_score_indicator,
};
pub use model::{ForestModel, ModelError, Prediction, Regressor, predict_sales};
pub use selection::{CompanyChoice, CompleteSelection, RawSelection, Selection};

/// Trait for abstracting asset loading.
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the historical sales table.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be read or parsed.
    fn load_dataset(&self) -> Result<SalesDataset, Self::Error>;

    /// Load the pre-fitted model.
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot be read or does not match the
    /// encoder layout.
    fn load_model(&self) -> Result<ForestModel, Self::Error>;

    /// Load the dashboard configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read or is invalid.
    fn load_config(&self) -> Result<DashboardConfig, Self::Error>;
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("could not encode selection: {0}")]
    Encode(#[from] EncodeError),
    #[error("prediction failed: {0}")]
    Model(#[from] ModelError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("invalid dashboard config: {0}")]
    Config(#[from] ConfigError),
}

/// Everything produced by one submit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOutcome {
    pub figure: FigureSpec,
    /// Empty when any dropdown is unset.
    pub predictions: Vec<Prediction>,
    pub window: Option<SalesWindow>,
    /// Historical releases of the selected genre before windowing.
    pub genre_history: usize,
}

/// Loaded dataset, model and config, shared read-only by every interaction.
#[derive(Debug, Clone)]
pub struct Dashboard<M: Regressor = ForestModel> {
    dataset: SalesDataset,
    model: M,
    config: DashboardConfig,
}

impl Dashboard<ForestModel> {
    /// Load all assets once through the platform loader.
    ///
    /// # Errors
    ///
    /// Returns the loader's error for the first asset that fails.
    pub fn from_loader<L: DataLoader>(loader: &L) -> Result<Self, L::Error> {
        let dataset = loader.load_dataset()?;
        let model = loader.load_model()?;
        let config = loader.load_config()?;
        debug!(
            "dashboard ready: {} records, {} trees",
            dataset.len(),
            model.trees.len()
        );
        Ok(Self::new(dataset, model, config))
    }
}

impl<M: Regressor> Dashboard<M> {
    pub const fn new(dataset: SalesDataset, model: M, config: DashboardConfig) -> Self {
        Self {
            dataset,
            model,
            config,
        }
    }

    #[must_use]
    pub const fn dataset(&self) -> &SalesDataset {
        &self.dataset
    }

    #[must_use]
    pub const fn model(&self) -> &M {
        &self.model
    }

    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Predict first-year sales for a complete selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection cannot be encoded or the model fails.
    pub fn predict(&self, selection: &CompleteSelection) -> Result<Vec<Prediction>, DashboardError> {
        let batch = encode(selection)?;
        Ok(predict_sales(&self.model, &batch)?)
    }

    /// Recompute the figure from the current control values.
    ///
    /// An incomplete selection is not an error: the figure then holds only the
    /// genre histogram.
    ///
    /// # Errors
    ///
    /// Returns an error if a complete selection cannot be encoded or scored.
    pub fn render(&self, selection: &Selection) -> Result<RenderOutcome, DashboardError> {
        let history = self.dataset.sales_for(selection.genre);
        let predictions = match selection.complete() {
            Some(complete) => self.predict(&complete)?,
            None => Vec::new(),
        };
        let figure = chart::assemble_figure(
            &history,
            selection.genre,
            &predictions,
            &self.config.chart,
        );
        let window = SalesWindow::around(&predictions, self.config.chart.window_margin);
        Ok(RenderOutcome {
            figure,
            predictions,
            window,
            genre_history: history.len(),
        })
    }

    /// Resolve raw dropdown strings, then [`Dashboard::render`].
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Catalog`] for values outside the lookup table.
    pub fn render_raw(&self, raw: &RawSelection) -> Result<RenderOutcome, DashboardError> {
        let selection = Selection::from_raw(raw)?;
        self.render(&selection)
    }

    #[must_use]
    pub fn echo(&self, control: ControlId, selection: &Selection) -> String {
        echo_for(control, selection)
    }
}
