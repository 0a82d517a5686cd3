use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: String,
    pub value: String,
    pub oninput: Callback<String>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub placeholder: String,
    #[prop_or("text".to_string())]
    pub input_type: String,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                oninput.emit(input.value());
            }
        })
    };

    let class = if props.error.is_some() {
        styles::INPUT_ERROR
    } else {
        styles::INPUT
    };

    html! {
        <div>
            <label class={styles::TEXT_LABEL}>{&props.label}</label>
            <input
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                {oninput}
                {class}
            />
            if let Some(error) = &props.error {
                <p class={styles::TEXT_ERROR}>{error}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: String,
    pub value: String,
    pub options: Vec<String>,
    pub onchange: Callback<String>,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
                onchange.emit(select.value());
            }
        })
    };

    html! {
        <div>
            <label class={styles::TEXT_LABEL}>{&props.label}</label>
            <select class={styles::SELECT} {onchange}>
                <option value="" selected={props.value.is_empty()} disabled=true>{"Select..."}</option>
                {
                    props.options.iter().map(|option| html! {
                        <option
                            key={option.clone()}
                            value={option.clone()}
                            selected={*option == props.value}
                        >{option}</option>
                    }).collect::<Html>()
                }
            </select>
            if let Some(error) = &props.error {
                <p class={styles::TEXT_ERROR}>{error}</p>
            }
        </div>
    }
}
