use salescast_core::{DashboardConfig, RenderOutcome, Selection};
use yew::prelude::*;

use super::handlers::run_submit;

#[derive(Clone)]
pub struct DashboardState {
    pub selection: UseStateHandle<Selection>,
    /// Last successful submit; the chart keeps showing it after an error.
    pub outcome: UseStateHandle<Option<RenderOutcome>>,
    pub error: UseStateHandle<Option<AttrValue>>,
}

/// Selection matching the configured slider defaults, dropdowns unset.
#[must_use]
pub fn initial_selection(config: &DashboardConfig) -> Selection {
    Selection {
        price: config.price.default,
        critic_score: config.critic_score.default,
        ..Selection::default()
    }
}

/// Control state plus the outcome of an initial submit with default values.
#[hook]
pub fn use_dashboard_state(initial: Selection) -> DashboardState {
    let first = use_memo((), move |_| run_submit(&initial));
    let selection = use_state(|| initial);
    let outcome = {
        let first = first.clone();
        use_state(move || (*first).clone().ok())
    };
    let error = use_state(move || (*first).clone().err().map(AttrValue::from));
    DashboardState {
        selection,
        outcome,
        error,
    }
}
