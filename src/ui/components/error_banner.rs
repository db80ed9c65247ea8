use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        p { class: theme::ERROR_BANNER, role: "alert", "{message}" }
    }
}
