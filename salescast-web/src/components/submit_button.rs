use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or_default]
    pub on_submit: Callback<()>,
}

#[function_component(SubmitButton)]
pub fn submit_button(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_submit.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <div class="submit-row">
            <button id="submit-btn" class="btn btn-primary" {onclick}>{ p.label.clone() }</button>
        </div>
    }
}
