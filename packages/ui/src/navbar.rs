use dioxus::prelude::*;

use crate::auth::use_auth;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top bar with the app name, platform-provided links and the signed-in user.
#[component]
pub fn Navbar(children: Element) -> Element {
    let auth = use_auth();
    let state = auth();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "navbar",
            span { class: "navbar-brand", "BITSA" }
            nav { class: "navbar-links", {children} }
            if let Some(user) = &state.user {
                span { class: "navbar-user", "{user.display_name()}" }
            }
        }
    }
}
