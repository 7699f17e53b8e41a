use dioxus::prelude::*;

use super::component::{open_preview, UI};
use super::state::EditorState;
use crate::catalog::{Article, Package};
use crate::dom;
use crate::text::capitalize;

const DEFAULT_CATEGORY: &str = "Nyheter";

#[component]
pub fn Sidebar() -> Element {
    let editor = use_context::<Signal<EditorState>>();
    let open_package = UI.read().open_package.clone();
    let state = editor.read();

    if let Some(package) = open_package.and_then(|id| state.catalog.package(&id).cloned()) {
        return rsx! { PackageView { package } };
    }

    let articles = state.catalog.articles().to_vec();
    let packages = state.catalog.packages().to_vec();

    rsx! {
        aside { class: "sidebar",
            h2 { "Artiklar" }
            if !packages.is_empty() {
                div { class: "package-folders",
                    for package in packages {
                        PackageFolder { key: "{package.id}", package }
                    }
                }
            }
            div { id: "articleList", class: "article-list",
                for article in articles {
                    ArticleCard { key: "{article.id}", article }
                }
            }
        }
    }
}

#[component]
fn PackageFolder(package: Package) -> Element {
    let id = package.id.clone();

    rsx! {
        div {
            class: "package-folder",
            "data-package-id": "{package.id}",
            onclick: move |_| UI.write().open_package = Some(id.clone()),
            span { class: "package-icon", "{package.icon}" }
            span { class: "package-name", "{package.name}" }
            span { class: "package-count", "{package.articles.len()}" }
        }
    }
}

#[component]
fn PackageView(package: Package) -> Element {
    rsx! {
        aside { class: "sidebar",
            div { id: "packageArticlesView", class: "package-view",
                button {
                    id: "packageBackBtn",
                    class: "package-back",
                    onclick: move |_| UI.write().open_package = None,
                    "← Tillbaka"
                }
                h2 { id: "packageTitle", "{package.icon} {package.name}" }
                div { id: "packageArticlesList", class: "article-list",
                    for article in package.articles {
                        ArticleCard { key: "{article.id}", article }
                    }
                }
            }
        }
    }
}

#[component]
fn ArticleCard(article: Article) -> Element {
    let mut editor = use_context::<Signal<EditorState>>();
    let (used, dragging) = {
        let state = editor.read();
        let id = article.id.as_str();
        (state.store.is_used(id), state.drag.is_dragging_card(id))
    };

    let mut class = String::from("article-card");
    if used {
        class.push_str(" used");
    }
    if dragging {
        class.push_str(" dragging");
    }
    let category = if article.category.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        capitalize(&article.category)
    };

    let drag_id = article.id.clone();
    let preview_id = article.id.clone();

    rsx! {
        div {
            class: "{class}",
            draggable: "true",
            "data-id": "{article.id}",
            ondragstart: move |e| {
                let mut state = editor.write();
                state.drag.start_from_card(drag_id.clone());
                if let Some(id) = state.drag.transfer_text() {
                    dom::publish_drag(&e.data(), id);
                }
            },
            ondragend: move |_| {
                editor.write().end_drag();
            },
            onclick: move |_| {
                if !editor.read().drag.is_dragging_card(preview_id.as_str()) {
                    open_preview(preview_id.clone());
                }
            },
            span { class: "article-category", "{category}" }
            h3 { "{article.headline}" }
            p { "{article.subheadline}" }
        }
    }
}
