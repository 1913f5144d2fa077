//! Centralized layout and presentation constants for Salescast.
//!
//! The feature layout values must match the column order the regression
//! model was fitted with. Changing any offset here without refitting the
//! model silently corrupts predictions, so they live in one reviewed place
//! rather than in external JSON assets.

// Feature layout -----------------------------------------------------------
pub const SCORE_COLUMN: usize = 0;
pub const LOG_PRICE_COLUMN: usize = 1;
pub const NO_SCORE_COLUMN: usize = 2;
pub const COMPANY_OFFSET: usize = 3;
pub const COMPANY_WIDTH: usize = 3;
pub const RATING_OFFSET: usize = COMPANY_OFFSET + COMPANY_WIDTH;
pub const RATING_WIDTH: usize = 4;
pub const PLATFORM_OFFSET: usize = RATING_OFFSET + RATING_WIDTH;
pub const PLATFORM_WIDTH: usize = 3;
pub const GENRE_OFFSET: usize = PLATFORM_OFFSET + PLATFORM_WIDTH;
pub const GENRE_WIDTH: usize = 17;
/// Total width of one encoded feature vector.
pub const FEATURE_WIDTH: usize = GENRE_OFFSET + GENRE_WIDTH;

// Dataset columns ----------------------------------------------------------
pub const GENRE_COLUMN_NAME: &str = "Genre";
pub const SALES_COLUMN_NAME: &str = "Global_Sales";

// Slider defaults ----------------------------------------------------------
pub(crate) const PRICE_MIN: f64 = 0.0;
pub(crate) const PRICE_MAX: f64 = 500.0;
pub(crate) const PRICE_STEP: f64 = 0.01;
pub(crate) const PRICE_DEFAULT: f64 = 19.99;
pub(crate) const SCORE_MIN: f64 = 0.0;
pub(crate) const SCORE_MAX: f64 = 10.0;
pub(crate) const SCORE_STEP: f64 = 0.01;
pub(crate) const SCORE_DEFAULT: f64 = 0.0;

// Chart styling ------------------------------------------------------------
pub(crate) const WINDOW_MARGIN: f64 = 1.5;
pub(crate) const MARKER_SIZE: u32 = 12;
pub(crate) const MARKER_LINE_WIDTH: u32 = 2;
pub(crate) const MARKER_LINE_COLOR: &str = "DarkSlateGrey";
pub(crate) const HISTOGRAM_COLOR: &str = "#88b7e3";
pub(crate) const HISTOGRAM_NAME: &str = "Global Sales";
pub(crate) const TITLE_PREFIX: &str = "1st Year Global Sales";
pub(crate) const X_AXIS_TITLE: &str = "Global Sales (million)";
pub(crate) const Y_AXIS_TITLE: &str = "Count";
pub(crate) const SINGLE_PREDICTION_NAME: &str = "prediction";
pub(crate) const SINGLE_PREDICTION_LABEL: &str = "result";

// Echo text ----------------------------------------------------------------
pub(crate) const ECHO_UNSET: &str = "None";
