use crate::booking::{ShoeEntry, ShoeId};
use crate::components::field::Field;
use crate::i18n;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub shoes: Vec<ShoeEntry>,
    pub on_size: Callback<(ShoeId, String)>,
    pub on_add: Callback<()>,
    pub on_remove: Callback<ShoeId>,
    #[prop_or_default]
    pub disabled: bool,
}

fn numbered(key: &str, number: usize) -> String {
    let number = number.to_string();
    let mut vars = BTreeMap::new();
    vars.insert("number", number.as_str());
    i18n::tr(key, Some(&vars))
}

/// One size input per booked pair of shoes, plus the "+" / "-" row controls.
///
/// Rows are keyed by [`ShoeId`]; the person number shown in each label is the
/// row's current position.
#[function_component(ShoeFields)]
pub fn shoe_fields(props: &Props) -> Html {
    let add = {
        let cb = props.on_add.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let rows = props.shoes.iter().enumerate().map(|(idx, entry)| {
        let number = idx + 1;
        let id = entry.id;
        let on_size = {
            let cb = props.on_size.clone();
            Callback::from(move |size: String| cb.emit((id, size)))
        };
        let remove = {
            let cb = props.on_remove.clone();
            Callback::from(move |_| cb.emit(id))
        };
        html! {
            <Field
                key={id.get()}
                name={format!("shoe-{}", id.get())}
                label={numbered("booking.shoe_size", number)}
                value={entry.size.clone()}
                disabled={props.disabled}
                oninput={on_size}
            >
                <button
                    type="button"
                    class="shoe-remove"
                    title={numbered("booking.remove_shoe", number)}
                    disabled={props.disabled}
                    onclick={remove}
                >
                    { "-" }
                </button>
            </Field>
        }
    });

    html! {
        <fieldset class="shoes">
            <legend>{ i18n::t("booking.shoes") }</legend>
            { for rows }
            <button
                type="button"
                class="shoe-add"
                title={i18n::t("booking.add_shoe")}
                disabled={props.disabled}
                onclick={add}
            >
                { "+" }
            </button>
        </fieldset>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingDraft;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props_for(draft: &BookingDraft) -> Props {
        Props {
            shoes: draft.shoes().to_vec(),
            on_size: Callback::noop(),
            on_add: Callback::noop(),
            on_remove: Callback::noop(),
            disabled: false,
        }
    }

    #[test]
    fn no_rows_only_renders_add_button() {
        crate::i18n::set_lang("en");
        let props = props_for(&BookingDraft::new());
        let renderer = LocalServerRenderer::<ShoeFields>::with_props(props);
        let html = block_on(renderer.render());
        assert!(html.contains("shoe-add"));
        assert!(!html.contains("Shoe size / person"));
    }

    #[test]
    fn rows_are_numbered_by_position() {
        crate::i18n::set_lang("en");
        let mut draft = BookingDraft::new();
        let first = draft.add_shoe();
        draft.add_shoe();
        draft.add_shoe();
        draft.remove_shoe(first);
        let renderer = LocalServerRenderer::<ShoeFields>::with_props(props_for(&draft));
        let html = block_on(renderer.render());
        assert!(html.contains("Shoe size / person 1"), "{html}");
        assert!(html.contains("Shoe size / person 2"), "{html}");
        assert!(!html.contains("Shoe size / person 3"), "{html}");
        assert_eq!(html.matches("shoe-remove").count(), 2);
        assert!(!html.contains("field-shoe-0"), "removed row is gone: {html}");
    }
}
