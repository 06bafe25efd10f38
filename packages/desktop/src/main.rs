use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

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

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ui::init_backend();
    tracing::info!(base_url = %config.api.base_url, demo = config.api.demo, "Starting BITSA desktop");
    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        ui::AuthProvider {
            ui::InterestGate {
                Router::<Route> {}
            }
        }
    }
}
