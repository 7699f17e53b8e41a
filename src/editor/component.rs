use dioxus::logger::tracing::{error, warn};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use super::modal::{ArticleModal, EditModeModal};
use super::newspaper::Newspaper;
use super::panel::Panel;
use super::sidebar::Sidebar;
use super::state::EditorState;
use super::toast::{show_toast, ToastHost, ToastKind};
use crate::catalog::ArticleId;
use crate::dom;
use crate::page_data::PageData;
use crate::prefs::{self, DesignChoice};
use crate::render::BrowserDice;
use crate::save::{save_layout, save_notice, FetchTransport, MISSING_GROUP_NOTICE, SAVING_NOTICE};
use crate::workflow::{footer_line, require_group_name};

const EDIT_LOCKED_NOTICE: &str = "Fyll i gruppnamn först för att låsa upp redigering!";
const FINISHED_NOTICE: &str = "Bra jobbat! Din framsida är klar.";
const SAVED_STEP_DELAY_MS: u32 = 100;
const PRINT_EDIT_OFFER_DELAY_MS: u32 = 500;

/// Transient UI state that is not part of the page layout.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub group_name: String,
    pub footer: Option<String>,
    pub design: DesignChoice,
    pub preview: Option<ArticleId>,
    pub open_package: Option<String>,
    pub panel_open: bool,
    pub active_step: usize,
    pub edit_offer_open: bool,
    pub edit_mode: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            group_name: String::new(),
            footer: None,
            design: DesignChoice::default(),
            preview: None,
            open_package: None,
            panel_open: false,
            active_step: 1,
            edit_offer_open: false,
            edit_mode: false,
        }
    }
}

pub static UI: GlobalSignal<UiState> = Signal::global(UiState::default);

/// Route component: loads the page data once, then hands over to the editor.
#[component]
pub fn Builder() -> Element {
    let data = use_hook(|| dom::read_page_data().map_err(|e| e.to_string()));

    match data {
        Ok(data) => rsx! { FrontpageEditor { data } },
        Err(message) => {
            error!(%message, "page data unusable");
            rsx! {
                div { class: "load-error",
                    h2 { "Artiklarna kunde inte laddas" }
                    p { "{message}" }
                }
            }
        }
    }
}

#[component]
fn FrontpageEditor(data: PageData) -> Element {
    let editor = use_context_provider(|| Signal::new(EditorState::new(data.clone(), &mut BrowserDice)));
    use_hook(|| UI.write().design = prefs::load_design());

    use_effect(move || {
        let _ = refit_key(editor.read().revision(), &UI.read());
        dom::run_text_fit();
    });

    let edit_mode = UI.read().edit_mode;
    let body_class = if edit_mode { "builder edit-mode" } else { "builder" };

    rsx! {
        div {
            class: "{body_class}",
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    UI.write().preview = None;
                }
            },

            Sidebar {}
            Newspaper {}
            Panel {}
            ArticleModal {}
            EditModeModal {}
            ToastHost {}

            if edit_mode {
                div { id: "editModeIndicator",
                    "✏️ Redigeringsläge aktivt - klicka på text för att redigera"
                }
            }
        }
    }
}

/// Everything that changes text container geometry: slot content and the
/// page-reference layout on the newspaper root.
fn refit_key(revision: u64, ui: &UiState) -> (u64, DesignChoice) {
    (revision, ui.design)
}

pub(crate) fn open_preview(id: ArticleId) {
    UI.write().preview = Some(id);
}

pub(crate) fn close_preview() {
    UI.write().preview = None;
}

pub(crate) fn set_step(step: usize) {
    UI.write().active_step = step;
}

/// Offers edit mode, which needs a group name first.
pub(crate) fn offer_edit_mode() -> bool {
    if require_group_name(&UI.peek().group_name).is_err() {
        show_toast(ToastKind::Error, EDIT_LOCKED_NOTICE);
        return false;
    }
    UI.write().edit_offer_open = true;
    true
}

pub(crate) fn enable_edit_mode() {
    let mut ui = UI.write();
    ui.edit_offer_open = false;
    ui.edit_mode = true;
}

pub(crate) fn skip_edit_mode() {
    UI.write().edit_offer_open = false;
    show_toast(ToastKind::Success, FINISHED_NOTICE);
}

pub(crate) fn set_design(choice: DesignChoice) {
    UI.write().design = choice;
    if let Err(e) = prefs::store_design(choice) {
        warn!(error = %e, "design preference not stored");
    }
    show_toast(ToastKind::Success, format!("{} aktiverad", choice.label()));
}

pub(crate) async fn save_frontpage(editor: Signal<EditorState>) {
    let group_name = UI.peek().group_name.clone();
    let has_group = require_group_name(&group_name).is_ok();
    if has_group {
        show_toast(ToastKind::Info, SAVING_NOTICE);
    }

    let slots = editor.peek().store.get_all();
    let result = save_layout(&FetchTransport, &group_name, slots, dom::now_iso()).await;
    let kind = if result.is_ok() { ToastKind::Success } else { ToastKind::Error };
    show_toast(kind, save_notice(&result));

    if has_group {
        TimeoutFuture::new(SAVED_STEP_DELAY_MS).await;
        set_step(2);
        if !UI.peek().edit_mode {
            offer_edit_mode();
        }
    }
}

pub(crate) async fn print_frontpage() {
    let group_name = UI.peek().group_name.clone();
    let Ok(group_name) = require_group_name(&group_name).map(str::to_string) else {
        show_toast(ToastKind::Error, MISSING_GROUP_NOTICE);
        return;
    };
    UI.write().footer = Some(footer_line(&group_name));

    // let the footer reach the DOM before the dialog snapshots it
    TimeoutFuture::new(0).await;
    if let Err(e) = dom::print() {
        error!(error = %e, "print failed");
    }

    TimeoutFuture::new(PRINT_EDIT_OFFER_DELAY_MS).await;
    if !UI.peek().edit_mode {
        offer_edit_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn design_switch_triggers_a_refit() {
        let mut ui = UiState::default();
        let before = refit_key(3, &ui);
        ui.design = DesignChoice::Hidden;
        assert_ne!(refit_key(3, &ui), before);

        ui.group_name = "7B".into();
        ui.edit_mode = true;
        assert_eq!(refit_key(3, &ui), refit_key(3, &UiState { design: DesignChoice::Hidden, ..UiState::default() }));
    }
}
