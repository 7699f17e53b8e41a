use dioxus::prelude::*;

use super::component::{close_preview, enable_edit_mode, skip_edit_mode, UI};
use super::state::EditorState;
use crate::text::{capitalize, quoted};

/// Read-only preview of the article clicked in the sidebar.
#[component]
pub fn ArticleModal() -> Element {
    let editor = use_context::<Signal<EditorState>>();
    let Some(id) = UI.read().preview.clone() else {
        return rsx! {};
    };
    let Some(article) = editor.read().catalog.find(id.as_str()).cloned() else {
        return rsx! {};
    };

    let category = capitalize(&article.category);
    let image = article.image().map(str::to_string);
    let quote = article.quote().map(quoted);
    let sender = article.quote_sender().map(str::to_string);

    rsx! {
        div {
            id: "articleModal",
            class: "modal show",
            tabindex: "-1",
            onmounted: move |e| async move {
                let _ = e.set_focus(true).await;
            },
            onclick: move |_| close_preview(),
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    close_preview();
                }
            },
            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),
                button { class: "modal-close", onclick: move |_| close_preview(), "×" }
                span { class: "modal-category", "{category}" }
                h2 { class: "modal-headline", "{article.headline}" }
                p { class: "modal-ingress", "{article.subheadline}" }
                if let Some(src) = image {
                    img { class: "modal-image", src: "{src}", alt: "{article.headline}" }
                } else {
                    div { class: "modal-no-image", "📷 Ingen bild" }
                }
                if let Some(quote) = quote {
                    blockquote { class: "modal-quote",
                        "{quote}"
                        if let Some(sender) = sender {
                            footer { "{sender}" }
                        }
                    }
                }
            }
        }
    }
}

/// Offer to switch the rendered page into content-editable mode.
#[component]
pub fn EditModeModal() -> Element {
    if !UI.read().edit_offer_open {
        return rsx! {};
    }

    rsx! {
        div { id: "editModeModal", class: "modal show",
            div { class: "modal-content edit-mode-content",
                button {
                    class: "modal-close",
                    onclick: move |_| UI.write().edit_offer_open = false,
                    "×"
                }
                h2 { "Vill du finslipa texterna?" }
                p { "I redigeringsläget kan du klicka på rubriker och texter på framsidan och skriva om dem." }
                div { class: "modal-actions",
                    button { id: "skipEditBtn", class: "btn", onclick: move |_| skip_edit_mode(), "Nej, jag är klar" }
                    button {
                        id: "enableEditBtn",
                        class: "btn btn-primary",
                        onclick: move |_| enable_edit_mode(),
                        "✏️ Ja, redigera"
                    }
                }
            }
        }
    }
}
