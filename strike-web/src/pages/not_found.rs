use crate::i18n;
use std::collections::BTreeMap;
use yew::prelude::*;

/// Unknown address. Offers the way back to the form and, when this session
/// already holds a confirmation, a shortcut to it.
#[derive(Properties, PartialEq)]
pub struct Props {
    /// Booking number of the confirmation kept in session storage.
    #[prop_or_default]
    pub latest_booking: Option<AttrValue>,
    pub on_go_home: Callback<()>,
    #[prop_or_default]
    pub on_view_booking: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let latest = props.latest_booking.as_ref().map(|booking_id| {
        let view_booking = {
            let cb = props.on_view_booking.clone();
            Callback::from(move |_| cb.emit(()))
        };
        let mut vars = BTreeMap::new();
        vars.insert("booking_id", booking_id.as_str());
        html! {
            <>
                <p class="latest-booking">{ i18n::tr("not_found.latest", Some(&vars)) }</p>
                <button type="button" class="view-booking" onclick={view_booking}>
                    { i18n::t("not_found.view_booking") }
                </button>
            </>
        }
    });

    html! {
        <section class="not-found" aria-live="assertive">
            <h2>{ i18n::t("not_found.title") }</h2>
            <p>{ i18n::t("not_found.message") }</p>
            { for latest }
            <button type="button" class="back" onclick={go_home}>
                { i18n::t("not_found.back") }
            </button>
        </section>
    }
}
