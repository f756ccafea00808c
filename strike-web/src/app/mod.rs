#[cfg(target_arch = "wasm32")]
use crate::components::Header;
#[cfg(target_arch = "wasm32")]
use crate::router::Route;
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod routing;

/// Active language code, provided to every page so a language switch re-renders them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locale(pub AttrValue);

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    let current_language = use_state(|| AttrValue::from(crate::i18n::current_lang()));
    let on_lang_change = {
        let current_language = current_language.clone();
        Callback::from(move |code: String| {
            crate::i18n::set_lang(&code);
            current_language.set(crate::i18n::current_lang().into());
        })
    };
    let locale = Locale((*current_language).clone());

    html! {
        <BrowserRouter basename={router_base}>
            <ContextProvider<Locale> context={locale}>
                <Header
                    current_lang={(*current_language).clone()}
                    on_lang_change={on_lang_change}
                />
                <main id="main">
                    <Switch<Route> render={routing::switch} />
                </main>
            </ContextProvider<Locale>>
        </BrowserRouter>
    }
}
