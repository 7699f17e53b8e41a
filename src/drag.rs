//! Drag-and-drop controller.
//!
//! One gesture at a time: `Idle → Dragging → Dropped | Cancelled`. The gesture
//! carries the article id itself instead of relying on the browser's
//! `dataTransfer`, so the controller can be driven without a DOM.

use dioxus::logger::tracing::debug;

use crate::catalog::{ArticleId, Catalog};
use crate::slot::{self, Slot};
use crate::store::SlotStore;

#[derive(Clone, Debug, PartialEq)]
pub enum DragSource {
    Sidebar,
    Slot(Slot),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragPayload {
    pub article: ArticleId,
    pub source: DragSource,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Dragging,
    Dropped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureEnd {
    Dropped,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq)]
struct Gesture {
    payload: DragPayload,
    phase: Phase,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragController {
    gesture: Option<Gesture>,
    hovered: Option<&'static str>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_from_card(&mut self, article: ArticleId) {
        self.begin(DragPayload {
            article,
            source: DragSource::Sidebar,
        });
    }

    /// Starts dragging a placed article out of its slot. Empty slots have
    /// nothing to carry, so the gesture is refused.
    pub fn start_from_slot(&mut self, store: &SlotStore, slot_name: &str) -> bool {
        let (Some(slot), Some(article)) = (slot::slot(slot_name), store.get(slot_name)) else {
            debug!(slot = slot_name, "drag from empty slot refused");
            return false;
        };
        self.begin(DragPayload {
            article: article.clone(),
            source: DragSource::Slot(slot),
        });
        true
    }

    fn begin(&mut self, payload: DragPayload) {
        self.gesture = Some(Gesture {
            payload,
            phase: Phase::Dragging,
        });
        self.hovered = None;
    }

    pub fn payload(&self) -> Option<&DragPayload> {
        self.gesture.as_ref().map(|g| &g.payload)
    }

    /// Article id to publish on the native drag event while a gesture is live.
    pub fn transfer_text(&self) -> Option<&str> {
        self.gesture
            .as_ref()
            .filter(|g| g.phase == Phase::Dragging)
            .map(|g| g.payload.article.as_str())
    }

    pub fn phase(&self) -> Option<Phase> {
        self.gesture.as_ref().map(|g| g.phase)
    }

    /// Pointer entered or moved over a slot.
    pub fn enter(&mut self, slot_name: &str) {
        if let Some(slot) = slot::slot(slot_name) {
            self.hovered = Some(slot.name);
        }
    }

    pub fn leave(&mut self, slot_name: &str) {
        if self.hovered == Some(slot_name) {
            self.hovered = None;
        }
    }

    /// Applies the gesture to `slot_name` and returns every slot whose
    /// content changed. A slot-to-slot drop onto a filled slot swaps the two.
    pub fn drop_on(&mut self, store: &mut SlotStore, catalog: &Catalog, slot_name: &str) -> Vec<Slot> {
        self.hovered = None;
        let Some(target) = slot::slot(slot_name) else {
            return Vec::new();
        };
        let Some(gesture) = self.gesture.as_mut().filter(|g| g.phase == Phase::Dragging) else {
            return Vec::new();
        };
        gesture.phase = Phase::Dropped;
        let payload = gesture.payload.clone();

        let mut changed = Vec::new();
        if let DragSource::Slot(origin) = payload.source {
            if origin != target {
                let displaced = store.get(target.name).cloned();
                store.clear(origin.name);
                changed.push(origin);
                if let Some(displaced) = displaced {
                    store.assign(catalog, origin.name, displaced.as_str());
                }
            }
        }

        if let Some(assignment) = store.assign(catalog, target.name, payload.article.as_str()) {
            changed.push(assignment.slot);
            changed.extend(assignment.vacated);
        }
        changed.sort_by_key(|s| s.name);
        changed.dedup();
        changed
    }

    /// Gesture finished, dropped or not. Clears every affordance.
    pub fn end(&mut self) -> GestureEnd {
        self.hovered = None;
        match self.gesture.take() {
            Some(Gesture {
                phase: Phase::Dropped,
                ..
            }) => GestureEnd::Dropped,
            _ => GestureEnd::Cancelled,
        }
    }

    pub fn is_drag_over(&self, slot_name: &str) -> bool {
        self.hovered == Some(slot_name)
    }

    pub fn is_dragging_card(&self, article_id: &str) -> bool {
        matches!(self.payload(), Some(DragPayload { article, source: DragSource::Sidebar }) if article.as_str() == article_id)
    }

    pub fn is_dragging_slot(&self, slot_name: &str) -> bool {
        matches!(self.payload(), Some(DragPayload { source: DragSource::Slot(slot), .. }) if slot.name == slot_name)
    }
}
