use dioxus::prelude::*;

use margin_calculator::{domain::CalculatorState, util::assets};

use crate::ui::{pages::CalculatorPage, shell::Shell};

#[component]
pub fn App() -> Element {
    let state = use_signal(CalculatorState::new);
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Shell { CalculatorPage {} }
    }
}
