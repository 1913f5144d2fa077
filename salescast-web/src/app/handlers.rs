//! Control updates and submit handling.

use std::str::FromStr;

use salescast_core::{
    CatalogError, Category, CompanyChoice, ControlId, DashboardConfig, Genre, PlatformTier, Rating,
    RenderOutcome, Selection,
};
use yew::prelude::*;

use super::state::DashboardState;
use crate::loader::shared_dashboard;

/// Apply a slider move, clamped to the configured range.
#[must_use]
pub fn apply_slider(
    selection: &Selection,
    control: ControlId,
    value: f64,
    config: &DashboardConfig,
) -> Selection {
    let mut next = *selection;
    match control {
        ControlId::Price => next.price = config.price.clamp(value),
        ControlId::CriticScore => next.critic_score = config.critic_score.clamp(value),
        ControlId::Company | ControlId::Genre | ControlId::Rating | ControlId::Platform => {}
    }
    next
}

/// Apply a dropdown change; `None` clears the control.
///
/// # Errors
///
/// Returns a [`CatalogError`] for values outside the lookup table.
pub fn apply_dropdown(
    selection: &Selection,
    control: ControlId,
    raw: Option<&str>,
) -> Result<Selection, CatalogError> {
    fn parse<T: Category>(raw: Option<&str>) -> Result<Option<T>, CatalogError> {
        raw.map(T::parse_value).transpose()
    }

    let mut next = *selection;
    match control {
        ControlId::Company => next.company = raw.map(CompanyChoice::from_str).transpose()?,
        ControlId::Genre => next.genre = parse::<Genre>(raw)?,
        ControlId::Rating => next.rating = parse::<Rating>(raw)?,
        ControlId::Platform => next.platform = parse::<PlatformTier>(raw)?,
        ControlId::Price | ControlId::CriticScore => {}
    }
    Ok(next)
}

/// Recompute the dashboard outcome for `selection`.
///
/// # Errors
///
/// Returns the user-facing message for asset or prediction failures.
pub fn run_submit(selection: &Selection) -> Result<RenderOutcome, String> {
    let dashboard = shared_dashboard().map_err(ToString::to_string)?;
    dashboard.render(selection).map_err(|err| err.to_string())
}

pub fn slider_callback(
    state: &DashboardState,
    control: ControlId,
    config: DashboardConfig,
) -> Callback<f64> {
    let selection = state.selection.clone();
    Callback::from(move |value: f64| {
        selection.set(apply_slider(&selection, control, value, &config));
    })
}

pub fn dropdown_callback(state: &DashboardState, control: ControlId) -> Callback<Option<AttrValue>> {
    let selection = state.selection.clone();
    let error = state.error.clone();
    Callback::from(move |raw: Option<AttrValue>| {
        match apply_dropdown(&selection, control, raw.as_ref().map(AttrValue::as_str)) {
            Ok(next) => selection.set(next),
            Err(err) => {
                log::error!("rejected {control} value: {err}");
                error.set(Some(AttrValue::from(err.to_string())));
            }
        }
    })
}

pub fn submit_callback(state: &DashboardState) -> Callback<()> {
    let selection = state.selection.clone();
    let outcome = state.outcome.clone();
    let error = state.error.clone();
    Callback::from(move |()| match run_submit(&selection) {
        Ok(next) => {
            outcome.set(Some(next));
            error.set(None);
        }
        Err(message) => {
            log::error!("submit failed: {message}");
            error.set(Some(AttrValue::from(message)));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use salescast_core::CompanySize;

    #[test]
    fn sliders_clamp_to_config() {
        let cfg = DashboardConfig::default_config();
        let sel = apply_slider(&Selection::default(), ControlId::Price, 900.0, &cfg);
        assert!((sel.price - 500.0).abs() < f64::EPSILON);
        let sel = apply_slider(&sel, ControlId::CriticScore, 7.5, &cfg);
        assert!((sel.critic_score - 7.5).abs() < f64::EPSILON);
        let unchanged = apply_slider(&sel, ControlId::Genre, 3.0, &cfg);
        assert_eq!(unchanged, sel);
    }

    #[test]
    fn dropdowns_set_and_clear() {
        let sel = apply_dropdown(&Selection::default(), ControlId::Company, Some("Show All")).unwrap();
        assert_eq!(sel.company, Some(CompanyChoice::ShowAll));
        let sel = apply_dropdown(&sel, ControlId::Company, Some("Small Company")).unwrap();
        assert_eq!(sel.company, Some(CompanyChoice::Size(CompanySize::Small)));
        let sel = apply_dropdown(&sel, ControlId::Platform, Some("Handheld")).unwrap();
        assert_eq!(sel.platform, Some(PlatformTier::Handheld));
        let sel = apply_dropdown(&sel, ControlId::Platform, None).unwrap();
        assert!(sel.platform.is_none());
    }

    #[test]
    fn unknown_dropdown_value_is_rejected() {
        let err = apply_dropdown(&Selection::default(), ControlId::Genre, Some("Farming"));
        assert!(err.is_err());
    }

    #[test]
    fn submit_with_missing_dropdowns_shows_histogram_only() {
        let sel = Selection {
            genre: Some(Genre::Action),
            ..Selection::default()
        };
        let outcome = run_submit(&sel).unwrap();
        assert!(outcome.predictions.is_empty());
        assert_eq!(outcome.figure.data.len(), 1);
    }

    #[test]
    fn submit_with_zero_price_reports_message() {
        let sel = Selection {
            company: Some(CompanyChoice::ShowAll),
            genre: Some(Genre::Action),
            platform: Some(PlatformTier::Pc),
            rating: Some(Rating::Level1),
            price: 0.0,
            critic_score: 5.0,
        };
        let message = run_submit(&sel).unwrap_err();
        assert!(message.contains("price"));
    }
}
