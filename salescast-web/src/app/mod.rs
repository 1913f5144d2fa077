use salescast_core::{CompanyChoice, ControlId, echo_for};
use yew::prelude::*;

use crate::components::dropdown::{Dropdown, DropdownOption};
use crate::components::header::Header;
use crate::components::prediction_summary::PredictionSummary;
use crate::components::sales_chart::SalesChart;
use crate::components::slider::Slider;
use crate::components::submit_button::SubmitButton;
use crate::loader::dashboard_config;

pub mod handlers;
pub mod labels;
pub mod state;

fn echo(control: ControlId, selection: &salescast_core::Selection) -> AttrValue {
    AttrValue::from(echo_for(control, selection))
}

fn dropdown_value<T: ToString>(value: Option<T>) -> Option<AttrValue> {
    value.map(|v| AttrValue::from(v.to_string()))
}

/// Single-page dashboard: controls on top, chart below.
///
/// Sliders and dropdowns only update their echo lines; the chart is
/// recomputed when the submit button is pressed.
#[function_component(App)]
pub fn app() -> Html {
    let config = dashboard_config();
    let app_state = state::use_dashboard_state(state::initial_selection(&config));
    let selection = *app_state.selection;

    let on_price = handlers::slider_callback(&app_state, ControlId::Price, config.clone());
    let on_score = handlers::slider_callback(&app_state, ControlId::CriticScore, config.clone());
    let on_company = handlers::dropdown_callback(&app_state, ControlId::Company);
    let on_genre = handlers::dropdown_callback(&app_state, ControlId::Genre);
    let on_rating = handlers::dropdown_callback(&app_state, ControlId::Rating);
    let on_platform = handlers::dropdown_callback(&app_state, ControlId::Platform);
    let on_submit = handlers::submit_callback(&app_state);

    let error = (*app_state.error).clone();
    let outcome = (*app_state.outcome).clone();

    html! {
        <main class="dashboard">
            <Header title={labels::TITLE} />
            <section class="controls">
                <div class="controls-column">
                    <Slider
                        id={ControlId::Price.dom_id()}
                        label={labels::PRICE_PROMPT}
                        config={config.price}
                        value={selection.price}
                        echo={echo(ControlId::Price, &selection)}
                        on_change={on_price}
                    />
                    <Slider
                        id={ControlId::CriticScore.dom_id()}
                        label={labels::SCORE_PROMPT}
                        config={config.critic_score}
                        value={selection.critic_score}
                        echo={echo(ControlId::CriticScore, &selection)}
                        on_change={on_score}
                    />
                    <Dropdown
                        id={ControlId::Company.dom_id()}
                        label={labels::COMPANY_PROMPT}
                        placeholder={labels::COMPANY_PLACEHOLDER}
                        options={DropdownOption::company_options()}
                        value={dropdown_value(selection.company.map(CompanyChoice::value))}
                        echo={echo(ControlId::Company, &selection)}
                        on_change={on_company}
                    />
                </div>
                <div class="controls-column">
                    <Dropdown
                        id={ControlId::Genre.dom_id()}
                        label={labels::GENRE_PROMPT}
                        placeholder={labels::GENRE_PLACEHOLDER}
                        options={DropdownOption::from_category::<salescast_core::Genre>()}
                        value={dropdown_value(selection.genre)}
                        echo={echo(ControlId::Genre, &selection)}
                        on_change={on_genre}
                    />
                    <Dropdown
                        id={ControlId::Rating.dom_id()}
                        label={labels::RATING_PROMPT}
                        placeholder={labels::RATING_PLACEHOLDER}
                        options={DropdownOption::from_category::<salescast_core::Rating>()}
                        value={dropdown_value(selection.rating)}
                        echo={echo(ControlId::Rating, &selection)}
                        on_change={on_rating}
                    />
                    <Dropdown
                        id={ControlId::Platform.dom_id()}
                        label={labels::PLATFORM_PROMPT}
                        placeholder={labels::PLATFORM_PLACEHOLDER}
                        options={DropdownOption::from_category::<salescast_core::PlatformTier>()}
                        value={dropdown_value(selection.platform)}
                        echo={echo(ControlId::Platform, &selection)}
                        on_change={on_platform}
                    />
                </div>
            </section>
            <SubmitButton label={labels::SUBMIT_LABEL} {on_submit} />
            if let Some(message) = error {
                <p class="alert alert-error" role="alert">{ message }</p>
            }
            if let Some(outcome) = outcome {
                <>
                    <PredictionSummary predictions={outcome.predictions.clone()} />
                    <SalesChart figure={outcome.figure.clone()} />
                </>
            }
        </main>
    }
}
