use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::views::{Home, NotFound, SiteShell};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    info!(version = env!("CARGO_PKG_VERSION"), "starting folio web");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        SiteShell {
            Router::<Route> {}
        }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! { NotFound { segments } }
}
