use crate::i18n;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_lang: AttrValue,
    pub on_lang_change: Callback<String>,
}

#[function_component(Header)]
pub fn header(props: &Props) -> Html {
    let on_change = {
        let cb = props.on_lang_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                cb.emit(select.value());
            }
        })
    };

    html! {
        <header class="app-header">
            <h1>{ i18n::t("app.title") }</h1>
            <p class="tagline">{ i18n::t("app.tagline") }</p>
            <label for="lang-select">{ i18n::t("app.language") }</label>
            <select id="lang-select" onchange={on_change}>
                { for i18n::locales().iter().map(|meta| html! {
                    <option
                        value={meta.code}
                        selected={meta.code == props.current_lang.as_str()}
                    >
                        { meta.name }
                    </option>
                }) }
            </select>
        </header>
    }
}
