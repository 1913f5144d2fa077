//! Pre-fitted regression model and prediction invocation.
//!
//! The model is an opaque artifact exported after training: a random forest
//! of regression trees serialized as JSON. It predicts log-scale first-year
//! sales, which [`predict_sales`] maps back to millions of units.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::CompanySize;
use crate::constants::FEATURE_WIDTH;
use crate::encoder::{FeatureBatch, FeatureVector, feature_names};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model JSON could not be parsed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("model expects {expected} features but the encoder produces {actual}")]
    WidthMismatch { expected: usize, actual: usize },
    #[error("model feature {index} is {found:?}, encoder column is {expected:?}")]
    FeatureNameMismatch {
        index: usize,
        expected: String,
        found: String,
    },
    #[error("model has no trees")]
    EmptyForest,
    #[error("tree {tree} splits on feature {feature}, beyond width {width}")]
    FeatureOutOfRange {
        tree: usize,
        feature: usize,
        width: usize,
    },
    #[error("model returned {actual} outputs for {expected} rows")]
    OutputCount { expected: usize, actual: usize },
}

/// Anything that maps feature rows to log-scale sales.
pub trait Regressor {
    /// Width of the rows the model was fitted on.
    fn n_features(&self) -> usize;

    /// Predict log-scale sales, one output per row.
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot score the rows.
    fn predict_log(&self, rows: &[FeatureVector]) -> Result<Vec<f64>, ModelError>;
}

/// Internal split: rows with `x[feature] <= threshold` go left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitNode {
    pub feature: usize,
    pub threshold: f64,
    pub left: Box<TreeNode>,
    pub right: Box<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    Split(SplitNode),
    Leaf { value: f64 },
}

impl TreeNode {
    /// Leaves have depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Split(split) => 1 + split.left.depth().max(split.right.depth()),
        }
    }

    fn predict_one(&self, tree: usize, row: &[f64]) -> Result<f64, ModelError> {
        let mut node = self;
        loop {
            match node {
                Self::Leaf { value } => return Ok(*value),
                Self::Split(split) => {
                    let x = row
                        .get(split.feature)
                        .ok_or(ModelError::FeatureOutOfRange {
                            tree,
                            feature: split.feature,
                            width: row.len(),
                        })?;
                    node = if *x <= split.threshold {
                        &split.left
                    } else {
                        &split.right
                    };
                }
            }
        }
    }

    fn max_feature(&self) -> Option<usize> {
        match self {
            Self::Leaf { .. } => None,
            Self::Split(split) => [
                Some(split.feature),
                split.left.max_feature(),
                split.right.max_feature(),
            ]
            .into_iter()
            .flatten()
            .max(),
        }
    }
}

/// Random-forest regressor: the prediction is the mean of all tree outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestModel {
    pub n_features: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    pub trees: Vec<TreeNode>,
}

impl ForestModel {
    /// Parse and validate a serialized forest.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the forest does not match
    /// the encoder layout.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        debug!(
            "loaded forest with {} trees (max depth {})",
            model.trees.len(),
            model.max_depth()
        );
        Ok(model)
    }

    /// Check the forest against the encoder's column layout.
    ///
    /// # Errors
    ///
    /// Returns the first layout or structure violation found.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.n_features != FEATURE_WIDTH {
            return Err(ModelError::WidthMismatch {
                expected: self.n_features,
                actual: FEATURE_WIDTH,
            });
        }
        if let Some(names) = &self.feature_names {
            if names.len() != FEATURE_WIDTH {
                return Err(ModelError::WidthMismatch {
                    expected: names.len(),
                    actual: FEATURE_WIDTH,
                });
            }
            for (index, (found, expected)) in names.iter().zip(feature_names()).enumerate() {
                if *found != expected {
                    return Err(ModelError::FeatureNameMismatch {
                        index,
                        expected,
                        found: found.clone(),
                    });
                }
            }
        }
        if self.trees.is_empty() {
            return Err(ModelError::EmptyForest);
        }
        for (tree, root) in self.trees.iter().enumerate() {
            if let Some(feature) = root.max_feature()
                && feature >= self.n_features
            {
                return Err(ModelError::FeatureOutOfRange {
                    tree,
                    feature,
                    width: self.n_features,
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.trees.iter().map(TreeNode::depth).max().unwrap_or(0)
    }
}

impl Regressor for ForestModel {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_log(&self, rows: &[FeatureVector]) -> Result<Vec<f64>, ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::EmptyForest);
        }
        #[allow(clippy::cast_precision_loss)]
        let n_trees = self.trees.len() as f64;
        rows.iter()
            .map(|row| {
                let mut sum = 0.0;
                for (index, tree) in self.trees.iter().enumerate() {
                    sum += tree.predict_one(index, row.as_slice())?;
                }
                Ok(sum / n_trees)
            })
            .collect()
    }
}

/// Natural-scale sales estimate for one encoded row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Present when the prediction comes from a "Show All" expansion.
    pub company: Option<CompanySize>,
    /// First-year global sales, millions of units.
    pub sales: f64,
}

/// Run the model over a batch and undo the log transform.
///
/// # Errors
///
/// Propagates model failures; no retry or fallback is attempted.
pub fn predict_sales<M: Regressor + ?Sized>(
    model: &M,
    batch: &FeatureBatch,
) -> Result<Vec<Prediction>, ModelError> {
    if model.n_features() != FEATURE_WIDTH {
        return Err(ModelError::WidthMismatch {
            expected: model.n_features(),
            actual: FEATURE_WIDTH,
        });
    }
    let rows: Vec<FeatureVector> = batch.iter().map(|row| row.features).collect();
    let outputs = model.predict_log(&rows)?;
    if outputs.len() != rows.len() {
        return Err(ModelError::OutputCount {
            expected: rows.len(),
            actual: outputs.len(),
        });
    }
    Ok(batch
        .iter()
        .zip(outputs)
        .map(|(row, log_sales)| Prediction {
            company: row.company,
            sales: log_sales.exp(),
        })
        .collect())
}
