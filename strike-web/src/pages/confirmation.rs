use crate::booking::{ConfirmationRecord, WebSessionStore, load_confirmation};
use crate::components::Field;
use crate::i18n;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ConfirmationViewProps {
    pub record: Option<ConfirmationRecord>,
    #[prop_or_default]
    pub on_new_booking: Callback<()>,
}

/// Read-only overview of a confirmed booking, or the "no booking" notice.
#[function_component(ConfirmationView)]
pub fn confirmation_view(props: &ConfirmationViewProps) -> Html {
    let new_booking = {
        let cb = props.on_new_booking.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let back = html! {
        <button type="button" class="new-booking" onclick={new_booking}>
            { i18n::t("confirmation.new_booking") }
        </button>
    };

    let Some(record) = props.record.as_ref() else {
        return html! {
            <section class="confirmation empty" aria-live="polite">
                <p class="no-booking">{ i18n::t("confirmation.none") }</p>
                { back }
            </section>
        };
    };

    html! {
        <section class="confirmation" aria-live="polite">
            <h2>{ i18n::t("confirmation.heading") }</h2>
            <Field
                name="when"
                label={i18n::t("confirmation.when")}
                value={record.display_when()}
                readonly={true}
            />
            <Field
                name="who"
                label={i18n::t("confirmation.who")}
                value={record.people.to_string()}
                readonly={true}
            />
            <Field
                name="lanes"
                label={i18n::t("confirmation.lanes")}
                value={record.lanes.to_string()}
                readonly={true}
            />
            <Field
                name="booking-number"
                label={i18n::t("confirmation.booking_number")}
                value={record.booking_id.clone()}
                readonly={true}
            />
            <p class="total">{ record.total_line() }</p>
            { back }
        </section>
    }
}

/// Confirmation view: resolves the record once, on entry.
///
/// The record passed along by the booking view wins; otherwise the last
/// confirmation kept in session storage is shown.
#[function_component(ConfirmationPage)]
pub fn confirmation_page() -> Html {
    let _locale = use_context::<crate::app::Locale>();
    let location = use_location();
    let navigator = use_navigator();
    let record = {
        let from_navigation = location
            .as_ref()
            .and_then(|loc| loc.state::<ConfirmationRecord>());
        use_state(move || load_confirmation(from_navigation.as_deref(), &WebSessionStore))
    };

    let on_new_booking = Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Booking);
        }
    });

    html! {
        <ConfirmationView record={(*record).clone()} on_new_booking={on_new_booking} />
    }
}
