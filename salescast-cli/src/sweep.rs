//! Seeded invariant sweeps over random control states.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use salescast_core::{
    Category, CompanyChoice, Dashboard, FeatureVector, Genre, PlatformTier, Rating, Regressor,
    Selection, encode,
};

/// Aggregate outcome of one sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepSummary {
    pub seed: u64,
    pub iterations: usize,
    pub complete: usize,
    pub incomplete: usize,
    pub predicted_rows: usize,
    pub min_sales: Option<f64>,
    pub max_sales: Option<f64>,
    pub failures: Vec<String>,
}

impl SweepSummary {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

fn pick<T: Copy>(rng: &mut ChaCha8Rng, options: &[T]) -> Option<T> {
    // One draw in five leaves the control unset.
    if rng.gen_ratio(1, 5) {
        None
    } else {
        options.choose(rng).copied()
    }
}

/// Random control state, with a valid (positive) price.
pub fn random_selection(rng: &mut ChaCha8Rng, dashboard: &Dashboard) -> Selection {
    let cfg = dashboard.config();
    let price = rng.gen_range(cfg.price.step.max(f64::MIN_POSITIVE)..=cfg.price.max);
    let critic_score = if rng.gen_bool(0.25) {
        0.0
    } else {
        rng.gen_range(cfg.critic_score.min..=cfg.critic_score.max)
    };
    Selection {
        company: pick(rng, &CompanyChoice::OPTIONS),
        critic_score,
        genre: pick(rng, Genre::ALL),
        platform: pick(rng, PlatformTier::ALL),
        price,
        rating: pick(rng, Rating::ALL),
    }
}

fn one_hot_ok<C: Category>(row: &FeatureVector) -> bool {
    row.block::<C>().len() == C::WIDTH && row.hot_index::<C>().is_some()
}

fn check(dashboard: &Dashboard, selection: &Selection, summary: &mut SweepSummary) -> Vec<String> {
    let mut failures = Vec::new();
    let outcome = match dashboard.render(selection) {
        Ok(outcome) => outcome,
        Err(err) => return vec![format!("render failed for {selection:?}: {err}")],
    };
    let Some(histogram) = outcome.figure.histogram() else {
        return vec!["figure has no histogram".to_string()];
    };

    let Some(complete) = selection.complete() else {
        summary.incomplete += 1;
        if outcome.figure.data.len() != 1 {
            failures.push(format!(
                "incomplete selection produced {} series",
                outcome.figure.data.len()
            ));
        }
        return failures;
    };
    summary.complete += 1;

    let expected_rows = if complete.company == CompanyChoice::ShowAll { 3 } else { 1 };
    match encode(&complete) {
        Ok(batch) => {
            if batch.len() != expected_rows {
                failures.push(format!("expected {expected_rows} rows, got {}", batch.len()));
            }
            for row in &batch {
                let features = &row.features;
                if features.as_slice().len() != dashboard.model().n_features() {
                    failures.push("feature width differs from model".to_string());
                }
                if !(one_hot_ok::<salescast_core::CompanySize>(features)
                    && one_hot_ok::<Rating>(features)
                    && one_hot_ok::<PlatformTier>(features)
                    && one_hot_ok::<Genre>(features))
                {
                    failures.push(format!("one-hot block broken for {complete:?}"));
                }
            }
        }
        Err(err) => failures.push(format!("encode failed: {err}")),
    }

    if outcome.predictions.len() != expected_rows {
        failures.push(format!(
            "expected {expected_rows} predictions, got {}",
            outcome.predictions.len()
        ));
    }
    if outcome.figure.data.len() != expected_rows + 1 {
        failures.push(format!(
            "expected {} series, got {}",
            expected_rows + 1,
            outcome.figure.data.len()
        ));
    }
    for prediction in &outcome.predictions {
        if !(prediction.sales.is_finite() && prediction.sales > 0.0) {
            failures.push(format!("non-positive sales {}", prediction.sales));
        }
        summary.min_sales = Some(summary.min_sales.map_or(prediction.sales, |m| m.min(prediction.sales)));
        summary.max_sales = Some(summary.max_sales.map_or(prediction.sales, |m| m.max(prediction.sales)));
    }
    summary.predicted_rows += outcome.predictions.len();

    if let Some(window) = outcome.window
        && histogram.x.iter().any(|&sales| !window.contains(sales))
    {
        failures.push("histogram value outside the sales window".to_string());
    }
    failures
}

/// Render `iterations` random selections and check every invariant.
pub fn run_sweep(dashboard: &Dashboard, iterations: usize, seed: u64) -> SweepSummary {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut summary = SweepSummary {
        seed,
        iterations,
        complete: 0,
        incomplete: 0,
        predicted_rows: 0,
        min_sales: None,
        max_sales: None,
        failures: Vec::new(),
    };
    for iteration in 0..iterations {
        let selection = random_selection(&mut rng, dashboard);
        let failures = check(dashboard, &selection, &mut summary);
        summary
            .failures
            .extend(failures.into_iter().map(|f| format!("#{iteration}: {f}")));
    }
    log::info!(
        "sweep seed={seed} iterations={iterations} complete={} failures={}",
        summary.complete,
        summary.failures.len()
    );
    summary
}
