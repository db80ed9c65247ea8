use dioxus::prelude::*;

use margin_calculator::domain::Field;

use crate::ui::theme;

/// One labelled text box. Reports every keystroke as the full new text.
#[component]
pub fn FieldInput(
    field: Field,
    value: String,
    is_source: bool,
    is_invalid: bool,
    on_edit: EventHandler<(Field, String)>,
) -> Element {
    let input_class = theme::input_class(is_source, is_invalid);

    rsx! {
        div {
            class: theme::INPUT_GROUP,
            label {
                r#for: field.key(),
                class: theme::INPUT_LABEL,
                "{field.label()}"
                if is_source {
                    span { class: theme::SOURCE_TAG, "given" }
                }
            }
            input {
                r#type: "text",
                inputmode: "decimal",
                id: field.key(),
                class: "{input_class}",
                value: "{value}",
                placeholder: field.placeholder(),
                oninput: move |evt| on_edit.call((field, evt.value())),
            }
        }
    }
}
