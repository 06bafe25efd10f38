use dioxus::prelude::*;

use views::{Dashboard, MyInterests, Shell};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Dashboard {},
        #[route("/interests")]
        MyInterests {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let config = ui::init_backend();
    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = ui::use_config();
    // The launcher installs the logger, so this is the first point it is live
    use_hook(|| {
        tracing::info!(base_url = %config.api.base_url, demo = config.api.demo, "Starting BITSA web");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::AuthProvider {
            ui::InterestGate {
                Router::<Route> {}
            }
        }
    }
}
