//! Chart specification assembly.
//!
//! The figure is a declarative, Plotly-compatible description: a list of
//! traces plus layout metadata. It is rebuilt in full for every submit and
//! never patched in place.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Genre};
use crate::config::ChartStyle;
use crate::model::Prediction;
use crate::numbers::{display_float, round_to};

/// Complete figure handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureSpec {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

impl FigureSpec {
    /// Marker traces, in prediction order.
    pub fn markers(&self) -> impl Iterator<Item = &MarkerTrace> {
        self.data.iter().filter_map(|trace| match trace {
            Trace::Scatter(marker) => Some(marker),
            Trace::Histogram(_) => None,
        })
    }

    #[must_use]
    pub fn histogram(&self) -> Option<&HistogramTrace> {
        self.data.iter().find_map(|trace| match trace {
            Trace::Histogram(hist) => Some(hist),
            Trace::Scatter(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(MarkerTrace),
    Histogram(HistogramTrace),
}

/// A single prediction drawn as a marker on the x axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerTrace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: String,
    pub marker: MarkerStyle,
    pub name: String,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub size: u32,
    pub line: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub width: u32,
    pub color: String,
}

/// Historical sales distribution; binning is left to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramTrace {
    pub x: Vec<f64>,
    pub autobinx: bool,
    pub name: String,
    pub marker: FillStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureLayout {
    pub title: String,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: String,
}

/// Sales range shown around the predictions. Bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesWindow {
    pub lower: f64,
    pub upper: f64,
}

impl SalesWindow {
    /// `[min - margin, max + margin]` over the predictions; `None` when empty.
    #[must_use]
    pub fn around(predictions: &[Prediction], margin: f64) -> Option<Self> {
        let mut sales = predictions.iter().map(|p| p.sales);
        let first = sales.next()?;
        let (min, max) = sales.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s)));
        Some(Self {
            lower: min - margin,
            upper: max + margin,
        })
    }

    #[must_use]
    pub fn contains(&self, sales: f64) -> bool {
        sales > self.lower && sales < self.upper
    }
}

/// Build the figure for one submit.
///
/// With no predictions the histogram carries every `history` value; otherwise
/// it is trimmed to the [`SalesWindow`] around the predictions.
#[must_use]
pub fn assemble_figure(
    history: &[f64],
    genre: Option<Genre>,
    predictions: &[Prediction],
    style: &ChartStyle,
) -> FigureSpec {
    let window = SalesWindow::around(predictions, style.window_margin);
    let mut data: Vec<Trace> = predictions
        .iter()
        .map(|prediction| Trace::Scatter(marker_trace(prediction, predictions.len(), style)))
        .collect();

    let shown: Vec<f64> = match window {
        Some(window) => history
            .iter()
            .copied()
            .filter(|&sales| window.contains(sales))
            .collect(),
        None => history.to_vec(),
    };
    data.push(Trace::Histogram(HistogramTrace {
        x: shown,
        autobinx: true,
        name: style.histogram_name.clone(),
        marker: FillStyle {
            color: style.histogram_color.clone(),
        },
    }));

    FigureSpec {
        data,
        layout: FigureLayout {
            title: figure_title(&style.title_prefix, genre),
            xaxis: Axis {
                title: style.x_axis_title.clone(),
            },
            yaxis: Axis {
                title: style.y_axis_title.clone(),
            },
        },
    }
}

fn marker_trace(prediction: &Prediction, total: usize, style: &ChartStyle) -> MarkerTrace {
    let (name, label) = match prediction.company {
        Some(company) if total > 1 => (
            format!("{}_{}", crate::constants::SINGLE_PREDICTION_NAME, company.value()),
            company.value().to_string(),
        ),
        _ => (
            crate::constants::SINGLE_PREDICTION_NAME.to_string(),
            crate::constants::SINGLE_PREDICTION_LABEL.to_string(),
        ),
    };
    let shown = display_float(round_to(prediction.sales, 2));
    MarkerTrace {
        x: vec![prediction.sales],
        y: vec![0.0],
        mode: "markers".to_string(),
        marker: MarkerStyle {
            size: style.marker_size,
            line: LineStyle {
                width: style.marker_line_width,
                color: style.marker_line_color.clone(),
            },
        },
        name,
        hovertemplate: format!("{label}<br>{shown}<extra></extra>"),
    }
}

/// `"<prefix> of <genre> game"`. Without a genre the bare prefix is used
/// instead of naming a placeholder genre such as `None`.
fn figure_title(prefix: &str, genre: Option<Genre>) -> String {
    match genre {
        Some(genre) => format!("{prefix} of {} game", genre.value()),
        None => prefix.to_string(),
    }
}

/// Fixed-width bins for renderers that cannot bin on their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBins {
    pub start: f64,
    pub width: f64,
    pub counts: Vec<usize>,
}

impl HistogramBins {
    /// Sturges-rule binning; `None` for an empty or non-finite sample.
    #[must_use]
    pub fn auto(values: &[f64]) -> Option<Self> {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let first = *finite.first()?;
        let (min, max) = finite
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        if (max - min).abs() < f64::EPSILON {
            return Some(Self {
                start: min - 0.5,
                width: 1.0,
                counts: vec![finite.len()],
            });
        }

        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        let bin_count = ((finite.len() as f64).log2().ceil() as usize + 1).max(1);
        #[allow(clippy::cast_precision_loss)]
        let width = (max - min) / bin_count as f64;
        let mut counts = vec![0_usize; bin_count];
        for value in finite {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let idx = (((value - min) / width).floor() as usize).min(bin_count - 1);
            counts[idx] += 1;
        }
        Some(Self {
            start: min,
            width,
            counts,
        })
    }

    /// Lower and upper edge of bin `idx`.
    #[must_use]
    pub fn edges(&self, idx: usize) -> (f64, f64) {
        #[allow(clippy::cast_precision_loss)]
        let lower = self.start + self.width * idx as f64;
        (lower, lower + self.width)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}
