use dioxus::prelude::*;

use super::component::UI;
use super::state::EditorState;
use crate::dom::{self, headline_id};
use crate::fit::FontStep;
use crate::render::{BrowserDice, SlotContent, SlotView};
use crate::slot::{slots_of, SlotKind};
use crate::workflow::HINT_NOTES;

#[component]
pub fn Newspaper() -> Element {
    let editor = use_context::<Signal<EditorState>>();
    let ui = UI.read();
    let design = ui.design.as_str();
    let footer = ui.footer.clone().unwrap_or_default();

    let notes: Vec<_> = {
        let state = editor.read();
        HINT_NOTES
            .iter()
            .map(|note| (note.text, note.targets.join(","), note.is_visible(&state.store)))
            .collect()
    };

    rsx! {
        main { class: "newspaper {design}",
            header { class: "masthead",
                span { class: "masthead-title", "BLT" }
                span { class: "masthead-subtitle", "Blekinge Läns Tidning" }
            }
            section { class: "puffar-section",
                for slot in slots_of(SlotKind::PromoStrip) {
                    SlotBox { key: "{slot.name}", name: slot.name }
                }
            }
            SlotBox { name: "texttopp" }
            SlotBox { name: "huvudnyhet" }
            section { class: "bottom-section",
                SlotBox { name: "mellan1" }
                SlotBox { name: "citat" }
                SlotBox { name: "liten1" }
                SlotBox { name: "liten2" }
            }
            div { class: "postits",
                for (text, target, visible) in notes {
                    div {
                        class: if visible { "postit" } else { "postit hidden" },
                        "data-target": "{target}",
                        "{text}"
                    }
                }
            }
            footer { id: "groupFooter", class: "group-footer", "{footer}" }
        }
    }
}

#[component]
fn SlotBox(name: &'static str) -> Element {
    let mut editor = use_context::<Signal<EditorState>>();
    let (view, drag_over, dragging, pinned) = {
        let state = editor.read();
        let Some(view) = state.view(name).cloned() else {
            return rsx! {};
        };
        (
            view,
            state.drag.is_drag_over(name),
            state.drag.is_dragging_slot(name),
            state.store.pinned_size(name),
        )
    };
    let editable = UI.read().edit_mode && view.article.is_some();

    let mut class = format!("slot {}", view.slot.kind.class());
    for (on, extra) in [
        (view.article.is_some(), "has-article"),
        (drag_over, "drag-over"),
        (dragging, "dragging"),
    ] {
        if on {
            class.push(' ');
            class.push_str(extra);
        }
    }
    let article_id = view.article.as_ref().map(|a| a.to_string()).unwrap_or_default();

    rsx! {
        div {
            class: "{class}",
            draggable: "true",
            "data-slot": name,
            "data-article-id": "{article_id}",
            ondragstart: move |e| {
                let mut state = editor.write();
                if !state.start_drag_from_slot(name) {
                    e.prevent_default();
                    return;
                }
                if let Some(id) = state.drag.transfer_text() {
                    dom::publish_drag(&e.data(), id);
                }
            },
            ondragend: move |_| {
                editor.write().end_drag();
            },
            ondragenter: move |e| {
                e.prevent_default();
                if !editor.peek().drag.is_drag_over(name) {
                    editor.write().drag.enter(name);
                }
            },
            ondragover: move |e| {
                e.prevent_default();
                if !editor.peek().drag.is_drag_over(name) {
                    editor.write().drag.enter(name);
                }
            },
            ondragleave: move |_| editor.write().drag.leave(name),
            ondrop: move |e| {
                e.prevent_default();
                editor.write().drop_on(name, &mut BrowserDice);
            },
            SlotBody { view, pinned, editable }
        }
    }
}

#[component]
fn SlotBody(view: SlotView, pinned: Option<f64>, editable: bool) -> Element {
    let name = view.slot.name;
    let kind = view.slot.kind;
    let editable = if editable { "true" } else { "false" };
    let headline_style = pinned.map(|px| format!("font-size: {px}px;")).unwrap_or_default();
    let user_size = if pinned.is_some() { "true" } else { "false" };
    let headline_dom_id = headline_id(name);

    match view.content {
        SlotContent::Placeholder { prompt, .. } if kind == SlotKind::PromoStrip => rsx! {
            div { class: "puff-content",
                span { class: "puff-category" }
                span { class: "puff-headline", "{prompt}" }
                span { class: "puff-page" }
            }
        },
        SlotContent::Placeholder { prompt, image_area: true } => rsx! {
            div { class: "slot-content",
                div { class: "image-placeholder",
                    p { class: "placeholder-text", "{prompt}" }
                    span { "📷 Bildyta" }
                }
            }
        },
        SlotContent::Placeholder { prompt, .. } => rsx! {
            div { class: "slot-content",
                p { class: "placeholder-text", "{prompt}" }
            }
        },
        SlotContent::Promo { category, headline, page } => rsx! {
            div { class: "puff-content",
                span { class: "puff-category editable", contenteditable: editable, "{category}" }
                span { class: "puff-headline editable", contenteditable: editable, "{headline}" }
                span { class: "puff-page", "{page}" }
            }
        },
        SlotContent::TextTop { headline, subheadline, page } => rsx! {
            div { class: "slot-content",
                div { class: "article-display",
                    h3 { contenteditable: editable, "{headline}" }
                    p { class: "subheadline", contenteditable: editable,
                        "{subheadline} "
                        span { class: "texttopp-page", "{page}" }
                    }
                }
            }
        },
        SlotContent::Quote { quote, sender, page } => rsx! {
            div { class: "slot-content",
                div { class: "article-display citat-display",
                    FontControls { name }
                    blockquote {
                        id: "{headline_dom_id}",
                        class: "citat-text",
                        style: "{headline_style}",
                        "data-user-size": user_size,
                        contenteditable: editable,
                        "{quote}"
                    }
                    span { class: "citattecken", "”" }
                    p { class: "citat-sender", contenteditable: editable, "{sender}" }
                    p { class: "article-page", "{page}" }
                }
            }
        },
        SlotContent::MainStory { headline, subheadline, image, alt, page } => rsx! {
            div { class: "slot-content",
                div { class: "article-display huvudnyhet-display",
                    div { class: "hero-image-container",
                        if let Some(src) = image {
                            HeroImage { key: "{src}", src: src.clone(), alt }
                        }
                        div { class: "headline-overlay",
                            h3 { contenteditable: editable, span { "{headline}" } }
                            span { class: "huvudnyhet-page", "{page}" }
                        }
                    }
                    div { class: "huvudnyhet-ingress",
                        p { contenteditable: editable, "{subheadline}" }
                    }
                }
            }
        },
        SlotContent::Feature { headline, page } => {
            let display = if kind == SlotKind::SmallNotice {
                "article-display notis-large-headline"
            } else {
                "article-display artikel-large-headline"
            };
            rsx! {
                div { class: "slot-content",
                    div { class: "{display}",
                        FontControls { name }
                        h3 {
                            id: "{headline_dom_id}",
                            style: "{headline_style}",
                            "data-user-size": user_size,
                            contenteditable: editable,
                            "{headline}"
                        }
                        p { class: "article-page", "{page}" }
                    }
                }
            }
        }
    }
}

#[component]
fn FontControls(name: &'static str) -> Element {
    let mut editor = use_context::<Signal<EditorState>>();

    rsx! {
        div { class: "font-size-controls",
            button {
                class: "font-size-btn decrease",
                title: "Minska textstorlek",
                draggable: "false",
                onclick: move |e| {
                    e.stop_propagation();
                    editor.write().step_font(name, FontStep::Decrease, dom::headline_font_size(name));
                },
                "-"
            }
            button {
                class: "font-size-btn increase",
                title: "Öka textstorlek",
                draggable: "false",
                onclick: move |e| {
                    e.stop_propagation();
                    editor.write().step_font(name, FontStep::Increase, dom::headline_font_size(name));
                },
                "+"
            }
        }
    }
}

/// Hero image that hides itself when the source fails to load.
#[component]
fn HeroImage(src: String, alt: String) -> Element {
    let mut broken = use_signal(|| false);

    rsx! {
        img {
            class: "hero-image",
            src: "{src}",
            alt: "{alt}",
            display: if broken() { "none" },
            onerror: move |_| broken.set(true),
        }
    }
}
