use std::collections::BTreeMap;

use dioxus::logger::tracing::debug;

use crate::catalog::Catalog;
use crate::drag::{DragController, GestureEnd};
use crate::fit::{FontBounds, FontStep};
use crate::page_data::PageData;
use crate::render::{PageRoll, RenderConfig, Renderer, SlotView};
use crate::slot::{self, Slot, LAYOUT};
use crate::store::SlotStore;

/// Everything the builder knows about the page being assembled. Built once
/// from the page data and handed to the component tree through context.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorState {
    pub catalog: Catalog,
    pub store: SlotStore,
    pub drag: DragController,
    renderer: Renderer,
    views: BTreeMap<&'static str, SlotView>,
    revision: u64,
}

impl EditorState {
    pub fn new(data: PageData, dice: &mut impl PageRoll) -> Self {
        let (catalog, limits) = data.into_catalog();
        let renderer = Renderer::new(RenderConfig {
            limits,
            ..RenderConfig::default()
        });
        let mut state = Self {
            catalog,
            store: SlotStore::new(),
            drag: DragController::new(),
            renderer,
            views: BTreeMap::new(),
            revision: 0,
        };
        for slot in LAYOUT {
            state.refresh(slot, dice);
        }
        state
    }

    /// Cached content of a slot. Re-rendered only when the slot changes.
    pub fn view(&self, slot_name: &str) -> Option<&SlotView> {
        self.views.get(slot_name)
    }

    /// Bumped after every change to slot content.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn refresh(&mut self, slot: Slot, dice: &mut impl PageRoll) {
        let view = self.renderer.render_slot(&self.store, &self.catalog, slot, dice);
        self.views.insert(slot.name, view);
    }

    fn refresh_all(&mut self, slots: &[Slot], dice: &mut impl PageRoll) {
        for slot in slots {
            self.refresh(*slot, dice);
        }
        if !slots.is_empty() {
            self.revision += 1;
        }
    }

    pub fn start_drag_from_slot(&mut self, slot_name: &str) -> bool {
        self.drag.start_from_slot(&self.store, slot_name)
    }

    pub fn end_drag(&mut self) -> GestureEnd {
        let end = self.drag.end();
        debug!(?end, "drag gesture finished");
        end
    }

    pub fn drop_on(&mut self, slot_name: &str, dice: &mut impl PageRoll) -> Vec<Slot> {
        let changed = self.drag.drop_on(&mut self.store, &self.catalog, slot_name);
        self.refresh_all(&changed, dice);
        changed
    }

    /// Places an article directly, outside of a drag gesture.
    pub fn assign(&mut self, slot_name: &str, article_id: &str, dice: &mut impl PageRoll) -> bool {
        let Some(assignment) = self.store.assign(&self.catalog, slot_name, article_id) else {
            return false;
        };
        let mut changed = vec![assignment.slot];
        changed.extend(assignment.vacated);
        self.refresh_all(&changed, dice);
        true
    }

    pub fn clear(&mut self, slot_name: &str, dice: &mut impl PageRoll) {
        let Some(slot) = slot::slot(slot_name) else {
            return;
        };
        if self.store.clear(slot_name).is_some() {
            self.refresh_all(&[slot], dice);
        }
    }

    /// Moves a slot's headline one px up or down and pins it there. `measured`
    /// is the size currently on screen, used when nothing is pinned yet.
    pub fn step_font(&mut self, slot_name: &str, step: FontStep, measured: Option<f64>) -> Option<f64> {
        let slot = slot::slot(slot_name)?;
        self.store.get(slot_name)?;
        let current = self.store.pinned_size(slot_name).or(measured)?;
        let size = FontBounds::for_kind(slot.kind).step(current, step)?;
        self.store.pin_size(slot_name, size);
        Some(size)
    }
}
