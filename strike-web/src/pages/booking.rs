use crate::booking::{
    BookingDraft, BookingError, ConfirmationRecord, DraftField, ShoeId, ValidationError,
    create_web_booking_engine, error_message, validate,
};
use crate::components::{Field, ShoeFields};
use crate::i18n;
use crate::router::Route;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

/// Edits applied to the draft by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftAction {
    SetField(DraftField, String),
    AddShoe,
    RemoveShoe(ShoeId),
    SetShoeSize(ShoeId, String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftState {
    pub draft: BookingDraft,
}

impl Reducible for DraftState {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut draft = self.draft.clone();
        match action {
            DraftAction::SetField(field, value) => draft.set_field(field, value),
            DraftAction::AddShoe => {
                draft.add_shoe();
            }
            DraftAction::RemoveShoe(id) => {
                draft.remove_shoe(id);
            }
            DraftAction::SetShoeSize(id, size) => {
                draft.set_shoe_size(id, size);
            }
        }
        Rc::new(Self { draft })
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct BookingFormProps {
    pub draft: BookingDraft,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub submitting: bool,
    pub on_action: Callback<DraftAction>,
    pub on_submit: Callback<()>,
}

const SCALAR_FIELDS: [(DraftField, &str, &str, &str); 4] = [
    (DraftField::Date, "date", "booking.date", "date"),
    (DraftField::Time, "time", "booking.time", "time"),
    (DraftField::People, "people", "booking.people", "number"),
    (DraftField::Lanes, "lanes", "booking.lanes", "number"),
];

#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let on_submit = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };

    let scalar_fields = SCALAR_FIELDS.iter().map(|(field, name, label_key, input_type)| {
        let field = *field;
        let oninput = {
            let cb = props.on_action.clone();
            Callback::from(move |value: String| cb.emit(DraftAction::SetField(field, value)))
        };
        html! {
            <Field
                name={*name}
                label={i18n::t(label_key)}
                input_type={Some(AttrValue::from(*input_type))}
                value={props.draft.field(field).to_string()}
                disabled={props.submitting}
                oninput={oninput}
            />
        }
    });

    let on_size = {
        let cb = props.on_action.clone();
        Callback::from(move |(id, size): (ShoeId, String)| {
            cb.emit(DraftAction::SetShoeSize(id, size));
        })
    };
    let on_add = {
        let cb = props.on_action.clone();
        Callback::from(move |()| cb.emit(DraftAction::AddShoe))
    };
    let on_remove = {
        let cb = props.on_action.clone();
        Callback::from(move |id: ShoeId| cb.emit(DraftAction::RemoveShoe(id)))
    };

    let submit_label = if props.submitting {
        i18n::t("booking.submitting")
    } else {
        i18n::t("booking.submit")
    };

    html! {
        <form class="booking" onsubmit={on_submit}>
            <h2>{ i18n::t("booking.heading") }</h2>
            <fieldset class="details">
                <legend>{ i18n::t("booking.when_what") }</legend>
                { for scalar_fields }
            </fieldset>
            <ShoeFields
                shoes={props.draft.shoes().to_vec()}
                on_size={on_size}
                on_add={on_add}
                on_remove={on_remove}
                disabled={props.submitting}
            />
            if let Some(error) = props.error.clone() {
                <p class="error" role="alert">{ error }</p>
            }
            <button type="submit" class="submit" disabled={props.submitting}>
                { submit_label }
            </button>
        </form>
    }
}

/// What a press on the submit button leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStep {
    /// A submission is already running; the press is dropped.
    Busy,
    /// The draft breaks a rule and the backend is not contacted.
    Rejected(ValidationError),
    /// Send this draft. The in-flight flag is now held.
    Send(BookingDraft),
}

/// Decide what a submit press does, claiming `in_flight` when the draft is sent.
pub fn begin_submit(in_flight: &RefCell<bool>, draft: &BookingDraft) -> SubmitStep {
    if *in_flight.borrow() {
        return SubmitStep::Busy;
    }
    if let Err(err) = validate(draft) {
        return SubmitStep::Rejected(err);
    }
    *in_flight.borrow_mut() = true;
    SubmitStep::Send(draft.clone())
}

/// Settle a finished submission and release `in_flight`.
///
/// A confirmed record goes to `on_confirmed`; a failure comes back as the
/// message to show on the form.
pub fn finish_submit(
    in_flight: &RefCell<bool>,
    outcome: Result<ConfirmationRecord, BookingError>,
    on_confirmed: impl FnOnce(ConfirmationRecord),
) -> Option<AttrValue> {
    *in_flight.borrow_mut() = false;
    match outcome {
        Ok(record) => {
            on_confirmed(record);
            None
        }
        Err(err) => {
            log::error!("Booking not completed: {err}");
            #[cfg(target_arch = "wasm32")]
            crate::dom::console_error(&err.to_string());
            Some(error_message(&err).into())
        }
    }
}

/// Open the confirmation view with `record` as the navigation payload.
pub fn show_confirmation(navigator: &Navigator, record: ConfirmationRecord) {
    navigator.push_with_state(&Route::Confirmation, record);
}

/// Booking view: owns the draft, submits it and hands the confirmation to the router.
#[function_component(BookingPage)]
pub fn booking_page() -> Html {
    let _locale = use_context::<crate::app::Locale>();
    let state = use_reducer(DraftState::default);
    let error = use_state(|| None::<AttrValue>);
    let submitting = use_state(|| false);
    let in_flight = use_mut_ref(|| false);
    let navigator = use_navigator();

    let on_action = {
        let state = state.clone();
        Callback::from(move |action: DraftAction| state.dispatch(action))
    };

    let on_submit = {
        let state = state.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |()| {
            let draft = match begin_submit(&in_flight, &state.draft) {
                SubmitStep::Busy => return,
                SubmitStep::Rejected(err) => {
                    error.set(Some(error_message(&BookingError::from(err)).into()));
                    return;
                }
                SubmitStep::Send(draft) => draft,
            };
            submitting.set(true);
            error.set(None);

            let in_flight = in_flight.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let engine = create_web_booking_engine();
                let outcome = engine.validate_and_submit(&draft).await;
                submitting.set(false);
                let message = finish_submit(&in_flight, outcome, |record| {
                    if let Some(nav) = navigator.as_ref() {
                        show_confirmation(nav, record);
                    }
                });
                error.set(message);
            });
        })
    };

    html! {
        <BookingForm
            draft={state.draft.clone()}
            error={(*error).clone()}
            submitting={*submitting}
            on_action={on_action}
            on_submit={on_submit}
        />
    }
}
