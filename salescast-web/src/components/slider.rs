use salescast_core::SliderConfig;
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SliderProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub config: SliderConfig,
    pub value: f64,
    /// Echo line rendered under the slider.
    pub echo: AttrValue,
    #[prop_or_default]
    pub on_change: Callback<f64>,
}

#[function_component(Slider)]
pub fn slider(props: &SliderProps) -> Html {
    let on_input = {
        let cb = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>()
                && let Ok(val) = input.value().parse::<f64>()
            {
                cb.emit(val);
            }
        })
    };
    let echo_id = format!("{}-text", props.id);
    html! {
        <div class="control">
            <p class="control_label">{ props.label.clone() }</p>
            <input
                id={props.id.clone()}
                class="range"
                type="range"
                min={props.config.min.to_string()}
                max={props.config.max.to_string()}
                step={props.config.step.to_string()}
                value={props.value.to_string()}
                oninput={on_input}
            />
            <p id={echo_id}>{ props.echo.clone() }</p>
        </div>
    }
}
