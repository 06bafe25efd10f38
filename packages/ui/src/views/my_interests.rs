use dioxus::prelude::*;

use crate::{use_auth, UserInterests};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Page listing the user's interests with edit and remove controls.
#[component]
pub fn MyInterestsView() -> Element {
    let auth = use_auth();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "view",
            h1 { class: "view-title", "My interests" }
            if auth().loading {
                p { class: "interest-status", "Loading..." }
            } else if auth().user.is_some() {
                UserInterests { editable: true }
            } else {
                p { class: "view-placeholder", "Sign in to manage your interests." }
            }
        }
    }
}
