//! Browser glue: measuring text, reading embedded data, drag payloads and printing.

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::DragData;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};

use crate::error::{Error, Result};
use crate::fit::{fit, FitTarget};
use crate::page_data::{PageData, APP_DATA_ELEMENT};

/// Every text node the fit pass looks at.
pub const FIT_SELECTOR: &str = ".slot .slot-content h3, .slot .slot-content .subheadline, \
    .slot .slot-content .citat-text, .slot .slot-content .citat-sender, \
    .slot .slot-content .article-page, .slot .slot-content .huvudnyhet-page, \
    .slot .slot-content .texttopp-page, .puff-headline, .puff-page, .puff-category";

fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::MissingElement("window".into()))
}

/// Page data from the host page's `<script id="app-data">`, or the bundled
/// sample when the page embeds none.
pub fn read_page_data() -> Result<PageData> {
    let embedded = window()?
        .document()
        .and_then(|doc| doc.get_element_by_id(APP_DATA_ELEMENT))
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());
    match embedded {
        Some(json) => PageData::from_json(&json),
        None => {
            debug!("no embedded page data, using bundled sample");
            PageData::bundled()
        }
    }
}

fn computed_font_size(window: &Window, element: &Element) -> Option<f64> {
    window
        .get_computed_style(element)
        .ok()
        .flatten()?
        .get_property_value("font-size")
        .ok()?
        .trim_end_matches("px")
        .parse()
        .ok()
}

/// On-screen size of a slot's adjustable headline.
pub fn headline_font_size(slot_name: &str) -> Option<f64> {
    let window = window().ok()?;
    let element = window.document()?.get_element_by_id(&headline_id(slot_name))?;
    computed_font_size(&window, &element)
}

pub fn headline_id(slot_name: &str) -> String {
    format!("headline-{slot_name}")
}

struct DomText {
    window: Window,
    element: HtmlElement,
    container: Element,
}

impl FitTarget for DomText {
    fn is_user_sized(&self) -> bool {
        self.element.get_attribute("data-user-size").as_deref() == Some("true")
    }

    fn reset(&mut self) {
        let style = self.element.style();
        let _ = style.set_property("white-space", "normal");
        let _ = style.set_property("hyphens", "none");
        let _ = style.set_property("word-break", "normal");
        let _ = style.remove_property("font-size");
        let _ = style.remove_property("line-height");
    }

    fn font_size(&self) -> Option<f64> {
        computed_font_size(&self.window, &self.element)
    }

    fn set_font_size(&mut self, px: f64) {
        let _ = self.element.style().set_property("font-size", &format!("{px}px"));
    }

    fn set_line_height(&mut self, ratio: f64) {
        let _ = self.element.style().set_property("line-height", &ratio.to_string());
    }

    fn overflows(&self) -> bool {
        self.element.scroll_height() > self.container.client_height()
            || self.element.scroll_width() > self.container.client_width()
    }
}

/// Runs the fit pass over every slot text node on the page.
pub fn run_text_fit() {
    let Ok(window) = window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let nodes = match document.query_selector_all(FIT_SELECTOR) {
        Ok(nodes) => nodes,
        Err(e) => {
            warn!(error = ?e, "text fit selector rejected");
            return;
        }
    };

    for i in 0..nodes.length() {
        let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let container = element
            .closest(".slot-content")
            .ok()
            .flatten()
            .or_else(|| element.parent_element());
        let Some(container) = container else {
            continue;
        };
        fit(&mut DomText {
            window: window.clone(),
            element,
            container,
        });
    }
}

/// MIME type the dragged article id is published under.
pub const DRAG_MIME: &str = "text/plain";

/// Publishes the dragged article id on the native event. Some browsers refuse
/// to start a drag whose `dataTransfer` stays empty.
pub fn publish_drag(data: &DragData, article_id: &str) {
    let event = data
        .downcast::<web_sys::DragEvent>()
        .cloned()
        .or_else(|| {
            data.downcast::<web_sys::Event>()
                .and_then(|e| e.dyn_ref::<web_sys::DragEvent>().cloned())
        });
    let Some(transfer) = event.and_then(|e| e.data_transfer()) else {
        debug!(article = article_id, "drag event carries no dataTransfer");
        return;
    };
    if let Err(e) = transfer.set_data(DRAG_MIME, article_id) {
        warn!(error = ?e, "dataTransfer rejected the drag payload");
    }
    transfer.set_effect_allowed("move");
}

/// Current time as an ISO-8601 string from the browser clock.
pub fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

/// Opens the browser's print dialog.
pub fn print() -> Result<()> {
    window()?.print()?;
    Ok(())
}
