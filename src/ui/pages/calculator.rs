use dioxus::prelude::*;

use margin_calculator::domain::{CalculatorState, Field};

use crate::ui::{
    components::{error_banner::ErrorBanner, field_input::FieldInput},
    theme,
};

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<CalculatorState>>();

    let (display, error, sources) = state.with(|st| {
        let outcome = st.outcome();
        (outcome.display.clone(), outcome.error, outcome.sources)
    });
    let invalid_field = error.and_then(|err| err.field());

    // Recompute happens inside the edit so rendering only reads the stored outcome.
    let on_edit = {
        let mut state = state.clone();
        move |(field, text): (Field, String)| {
            tracing::debug!(%field, %text, "field edited");
            state.with_mut(|st| st.edit(field, text));
        }
    };

    rsx! {
        div {
            class: theme::CARD,
            h2 { class: theme::CARD_TITLE, "Margin Calculator" }
            if let Some(message) = display.error.clone() {
                ErrorBanner { message }
            }
            for field in Field::DISPLAY_ORDER {
                FieldInput {
                    key: "{field.key()}",
                    field,
                    value: display.get(field).to_string(),
                    is_source: sources.is_some_and(|pair| pair.contains(field)),
                    is_invalid: invalid_field == Some(field),
                    on_edit,
                }
            }
        }
    }
}
