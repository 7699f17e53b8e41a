use dioxus::prelude::*;

use super::component::{print_frontpage, save_frontpage, set_design, set_step, UI};
use super::state::EditorState;
use crate::prefs::DesignChoice;
use crate::workflow::{step_status, STEPS};

/// "Klar" button plus the right-hand panel with the save and print steps.
#[component]
pub fn Panel() -> Element {
    let editor = use_context::<Signal<EditorState>>();
    let ui = UI.read();
    let panel_class = if ui.panel_open { "right-panel open" } else { "right-panel" };
    let active = ui.active_step;
    let group_name = ui.group_name.clone();
    let design = ui.design;

    rsx! {
        button {
            id: "finishBtn",
            class: "finish-btn",
            onclick: move |_| {
                UI.write().panel_open = true;
                set_step(1);
            },
            "Klar"
        }
        div { id: "rightPanel", class: "{panel_class}",
            button {
                class: "panel-close",
                onclick: move |_| UI.write().panel_open = false,
                "×"
            }
            ol { class: "steps",
                for (i, label) in STEPS.iter().enumerate() {
                    li { class: "step {step_status(i + 1, active).class()}",
                        span { class: "step-number", "{i + 1}" }
                        span { class: "step-label", "{label}" }
                    }
                }
            }
            label { r#for: "groupName", "Gruppnamn" }
            input {
                id: "groupName",
                r#type: "text",
                placeholder: "T.ex. Klass 7B grupp 3",
                value: "{group_name}",
                oninput: move |e| UI.write().group_name = e.value(),
            }
            div { class: "panel-actions",
                button {
                    id: "saveBtn",
                    class: "btn btn-primary",
                    onclick: move |_| {
                        spawn(save_frontpage(editor));
                    },
                    "💾 Spara"
                }
                button {
                    id: "printBtn",
                    class: "btn",
                    onclick: move |_| {
                        spawn(print_frontpage());
                    },
                    "🖨️ Skriv ut"
                }
            }
            label { r#for: "designSelect", "Sidreferens" }
            select {
                id: "designSelect",
                onchange: move |e| {
                    if let Ok(choice) = e.value().parse::<DesignChoice>() {
                        set_design(choice);
                    }
                },
                for choice in DesignChoice::ALL {
                    option {
                        value: choice.as_str(),
                        selected: choice == design,
                        "{choice.label()}"
                    }
                }
            }
        }
    }
}
