use crate::booking::{WebSessionStore, load_confirmation};
use crate::pages::booking::{BookingPage, show_confirmation};
use crate::pages::confirmation::ConfirmationPage;
use crate::pages::not_found::NotFound;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[must_use]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Booking => html! { <BookingPage /> },
        Route::Confirmation => html! { <ConfirmationPage /> },
        Route::NotFound => html! { <NotFoundRoute /> },
    }
}

#[function_component(NotFoundRoute)]
fn not_found_route() -> Html {
    let _locale = use_context::<super::Locale>();
    let navigator = use_navigator();
    let latest = use_state(|| load_confirmation(None, &WebSessionStore));

    let on_go_home = {
        let navigator = navigator.clone();
        Callback::from(move |()| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::Booking);
            }
        })
    };
    let on_view_booking = {
        let latest = latest.clone();
        Callback::from(move |()| {
            if let (Some(nav), Some(record)) = (navigator.as_ref(), (*latest).clone()) {
                show_confirmation(nav, record);
            }
        })
    };
    let latest_booking = latest
        .as_ref()
        .map(|record| AttrValue::from(record.booking_id.clone()));

    html! {
        <NotFound
            latest_booking={latest_booking}
            on_go_home={on_go_home}
            on_view_booking={on_view_booking}
        />
    }
}
