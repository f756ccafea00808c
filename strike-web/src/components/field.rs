use yew::prelude::*;

/// Labelled text input. The label and input share a wrapper so the input can
/// be found from its label.
#[derive(Properties, PartialEq, Clone)]
pub struct FieldProps {
    pub name: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub input_type: Option<AttrValue>,
    #[prop_or_default]
    pub readonly: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub oninput: Callback<String>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    let oninput = {
        let cb = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let input_type = props.input_type.clone().unwrap_or_else(|| "text".into());
    let id = format!("field-{}", props.name);

    html! {
        <div class="field">
            <label for={id.clone()}>{ props.label.clone() }</label>
            <input
                id={id}
                name={props.name.clone()}
                type={input_type}
                value={props.value.clone()}
                readonly={props.readonly}
                disabled={props.disabled}
                oninput={oninput}
            />
            { props.children.clone() }
        </div>
    }
}
