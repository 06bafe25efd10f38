use dioxus::prelude::*;
use ui::views::{DashboardView, MyInterestsView};
use ui::Navbar;

use crate::Route;

/// Navbar above the routed page.
#[component]
pub fn Shell() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Dashboard {}, "Dashboard" }
            Link { to: Route::MyInterests {}, "My interests" }
        }
        Outlet::<Route> {}
    }
}

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();

    rsx! {
        DashboardView {
            on_navigate_interests: move |_| {
                nav.push(Route::MyInterests {});
            },
        }
    }
}

#[component]
pub fn MyInterests() -> Element {
    rsx! { MyInterestsView {} }
}
