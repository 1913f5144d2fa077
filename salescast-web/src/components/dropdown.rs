use salescast_core::{Category, CompanyChoice};
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub label: AttrValue,
    pub value: AttrValue,
}

impl DropdownOption {
    /// One option per catalog variant, in dropdown order.
    #[must_use]
    pub fn from_category<C: Category>() -> Vec<Self> {
        C::ALL
            .iter()
            .map(|variant| Self {
                label: AttrValue::from(variant.label()),
                value: AttrValue::from(variant.value()),
            })
            .collect()
    }

    #[must_use]
    pub fn company_options() -> Vec<Self> {
        CompanyChoice::OPTIONS
            .iter()
            .map(|choice| Self {
                label: AttrValue::from(choice.label()),
                value: AttrValue::from(choice.value()),
            })
            .collect()
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct DropdownProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub placeholder: AttrValue,
    pub options: Vec<DropdownOption>,
    #[prop_or_default]
    pub value: Option<AttrValue>,
    pub echo: AttrValue,
    /// Emits `None` when the placeholder is picked again.
    #[prop_or_default]
    pub on_change: Callback<Option<AttrValue>>,
}

#[function_component(Dropdown)]
pub fn dropdown(props: &DropdownProps) -> Html {
    let on_change = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                let value = sel.value();
                cb.emit((!value.is_empty()).then(|| value.into()));
            }
        })
    };
    let echo_id = format!("{}-text", props.id);
    html! {
        <div class="control">
            <p class="control_label">{ props.label.clone() }</p>
            <select
                id={props.id.clone()}
                class="select select-bordered"
                value={props.value.clone().unwrap_or_default()}
                onchange={on_change}
            >
                <option value="" selected={props.value.is_none()}>{ props.placeholder.clone() }</option>
                { for props.options.iter().map(|opt| {
                    let selected = props.value.as_ref() == Some(&opt.value);
                    html! { <option value={opt.value.clone()} {selected}>{ opt.label.clone() }</option> }
                })}
            </select>
            <p id={echo_id}>{ props.echo.clone() }</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use salescast_core::Rating;
    use yew::LocalServerRenderer;

    #[test]
    fn category_options_use_display_labels() {
        let options = DropdownOption::from_category::<Rating>();
        assert_eq!(options.len(), 4);
        assert_eq!(options[0].value.as_str(), "Level1");
        assert_eq!(options[0].label.as_str(), "Everyone(E, EC, E10)");
        let company = DropdownOption::company_options();
        assert_eq!(company.last().unwrap().label.as_str(), "Show All Possible Results");
    }

    #[test]
    fn dropdown_renders_placeholder_first() {
        let props = DropdownProps {
            id: AttrValue::from("rating"),
            label: AttrValue::from("Choose the ESRB rating of your game: "),
            placeholder: AttrValue::from("Select a Rating"),
            options: DropdownOption::from_category::<Rating>(),
            value: None,
            echo: AttrValue::from("You have selected \"None\""),
            on_change: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Dropdown>::with_props(props).render());
        let placeholder = html.find("Select a Rating").unwrap();
        let first_option = html.find("Everyone(E, EC, E10)").unwrap();
        assert!(placeholder < first_option);
        assert!(html.contains("rating-text"));
    }
}
