use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    html! {
        <header id="header" role="banner">
            <h1 class="title">{ p.title.clone() }</h1>
        </header>
    }
}
