//! Drag-and-drop newspaper front-page builder.
//!
//! The layout core (catalog, slots, store, renderer, drag controller, text
//! fitting, saving) is plain Rust and runs anywhere; the `editor` module binds
//! it to the browser with dioxus.

use dioxus::prelude::*;

pub mod catalog;
pub mod dom;
pub mod drag;
pub mod editor;
pub mod error;
pub mod fit;
pub mod page_data;
pub mod prefs;
pub mod render;
pub mod save;
pub mod slot;
pub mod store;
pub mod text;
pub mod workflow;

pub use error::{Error, Result};

use editor::Builder;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Builder {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "not-found",
            h2 { "Sidan finns inte" }
            p { "/{path}" }
            Link { to: Route::Builder {}, "Till framsidan" }
        }
    }
}
