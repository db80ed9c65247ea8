use dioxus::prelude::*;

use margin_calculator::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let version = version_label();

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                h1 { class: "app-title", "{APP_NAME}" }
                span { class: "app-version", "{version}" }
            }
            main { class: "app-main", {children} }
        }
    }
}
