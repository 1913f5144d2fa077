use salescast_core::{Category, Prediction};
use salescast_core::numbers::{display_float, round_to};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub predictions: Vec<Prediction>,
}

fn line(prediction: &Prediction) -> String {
    let label = prediction.company.map_or("Predicted", Category::value);
    format!(
        "{label}: {} million",
        display_float(round_to(prediction.sales, 2))
    )
}

/// Text rendering of the predicted sales next to the chart.
#[function_component(PredictionSummary)]
pub fn prediction_summary(p: &Props) -> Html {
    if p.predictions.is_empty() {
        return Html::default();
    }
    html! {
        <ul class="prediction-summary" aria-live="polite">
            { for p.predictions.iter().map(|pred| html! { <li>{ line(pred) }</li> }) }
        </ul>
    }
}
