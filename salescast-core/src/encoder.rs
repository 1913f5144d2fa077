//! Feature encoding: turns a complete selection into the model's input rows.
//!
//! Layout of one row (width [`FEATURE_WIDTH`]):
//!
//! ```text
//! [critic_score, ln(price), no_score, company(3), rating(4), platform(3), genre(17)]
//! ```
//!
//! Choosing "Show All" for the company produces three rows, one per company
//! size, identical outside the company block.

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::catalog::{Category, CompanySize, Genre, PlatformTier, Rating};
use crate::constants::{FEATURE_WIDTH, LOG_PRICE_COLUMN, NO_SCORE_COLUMN, SCORE_COLUMN};
use crate::selection::{CompanyChoice, CompleteSelection};

#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum EncodeError {
    #[error("price must be a positive finite number (got {0})")]
    NonPositivePrice(f64),
    #[error("critic score must be finite (got {0})")]
    NonFiniteScore(f64),
}

/// One encoded model input row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector(#[serde(with = "fixed_width")] [f64; FEATURE_WIDTH]);

impl FeatureVector {
    #[must_use]
    pub const fn as_slice(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn get(&self, column: usize) -> Option<f64> {
        self.0.get(column).copied()
    }

    /// Slice of the one-hot block for category `C`.
    #[must_use]
    pub fn block<C: Category>(&self) -> &[f64] {
        &self.0[C::OFFSET..C::OFFSET + C::WIDTH]
    }

    /// Column set inside the block for category `C`, if exactly one is hot.
    #[must_use]
    pub fn hot_index<C: Category>(&self) -> Option<usize> {
        let block = self.block::<C>();
        let mut hot = block
            .iter()
            .enumerate()
            .filter(|(_, value)| (**value - 1.0).abs() < f64::EPSILON);
        let first = hot.next().map(|(idx, _)| idx)?;
        let zeros = block.iter().filter(|value| value.abs() < f64::EPSILON).count();
        (hot.next().is_none() && zeros == C::WIDTH - 1).then_some(first)
    }
}

mod fixed_width {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::FEATURE_WIDTH;

    pub fn serialize<S: Serializer>(
        values: &[f64; FEATURE_WIDTH],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        values.as_slice().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<[f64; FEATURE_WIDTH], D::Error> {
        let values = Vec::<f64>::deserialize(deserializer)?;
        let len = values.len();
        values
            .try_into()
            .map_err(|_| D::Error::invalid_length(len, &"a full feature row"))
    }
}

/// Encoded row tagged with the company size it was expanded for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    /// Set only when the row comes from a "Show All" expansion.
    pub company: Option<CompanySize>,
    pub features: FeatureVector,
}

/// One row for a fixed company size, three for "Show All".
pub type FeatureBatch = SmallVec<[FeatureRow; 3]>;

/// 1.0 when no critic score was given (slider left at zero).
#[must_use]
pub fn missing_score_indicator(critic_score: f64) -> f64 {
    if critic_score == 0.0 { 1.0 } else { 0.0 }
}

/// Encode a complete selection.
///
/// # Errors
///
/// Returns [`EncodeError::NonPositivePrice`] when the price has no finite
/// logarithm, and [`EncodeError::NonFiniteScore`] for NaN or infinite scores.
pub fn encode(selection: &CompleteSelection) -> Result<FeatureBatch, EncodeError> {
    if !(selection.price.is_finite() && selection.price > 0.0) {
        return Err(EncodeError::NonPositivePrice(selection.price));
    }
    if !selection.critic_score.is_finite() {
        return Err(EncodeError::NonFiniteScore(selection.critic_score));
    }

    let mut base = [0.0; FEATURE_WIDTH];
    base[SCORE_COLUMN] = selection.critic_score;
    base[LOG_PRICE_COLUMN] = selection.price.ln();
    base[NO_SCORE_COLUMN] = missing_score_indicator(selection.critic_score);
    set_hot(&mut base, selection.rating);
    set_hot(&mut base, selection.platform);
    set_hot(&mut base, selection.genre);

    let batch: FeatureBatch = match selection.company {
        CompanyChoice::Size(size) => {
            let mut row = base;
            set_hot(&mut row, size);
            SmallVec::from_iter([FeatureRow {
                company: None,
                features: FeatureVector(row),
            }])
        }
        CompanyChoice::ShowAll => CompanySize::ALL
            .iter()
            .map(|&size| {
                let mut row = base;
                set_hot(&mut row, size);
                FeatureRow {
                    company: Some(size),
                    features: FeatureVector(row),
                }
            })
            .collect(),
    };

    debug!(
        "encoded {} row(s) for genre={} platform={} rating={}",
        batch.len(),
        selection.genre,
        selection.platform,
        selection.rating
    );
    Ok(batch)
}

fn set_hot<C: Category>(row: &mut [f64; FEATURE_WIDTH], choice: C) {
    row[C::OFFSET + choice.feature_index()] = 1.0;
}

/// Column names in layout order, matching the fitted model's columns.
#[must_use]
pub fn feature_names() -> Vec<String> {
    let mut names = vec![
        "critic_score".to_string(),
        "log_price".to_string(),
        "no_score".to_string(),
    ];
    names.extend(block_names::<CompanySize>("company"));
    names.extend(block_names::<Rating>("rating"));
    names.extend(block_names::<PlatformTier>("platform"));
    names.extend(block_names::<Genre>("genre"));
    names
}

fn block_names<C: Category>(prefix: &str) -> Vec<String> {
    let mut ordered: Vec<C> = C::ALL.to_vec();
    ordered.sort_by_key(|variant| variant.feature_index());
    ordered
        .into_iter()
        .map(|variant| format!("{prefix}={}", variant.value()))
        .collect()
}
