use salescast_core::FigureSpec;
use yew::prelude::*;

use crate::plotly;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub figure: FigureSpec,
    #[prop_or(AttrValue::Static(crate::app::labels::CHART_ELEMENT_ID))]
    pub element_id: AttrValue,
}

/// Chart container; Plotly draws into it after every figure change.
#[function_component(SalesChart)]
pub fn sales_chart(p: &Props) -> Html {
    {
        let element_id = p.element_id.clone();
        use_effect_with(p.figure.clone(), move |figure| {
            if let Err(err) = plotly::render_figure(&element_id, figure) {
                log::error!("chart render failed: {err}");
            }
        });
    }
    html! {
        <div class="pretty_container" id="right-column">
            <div
                id={p.element_id.clone()}
                class="sales-graph"
                data-figure={plotly::figure_json(&p.figure)}
            />
        </div>
    }
}
