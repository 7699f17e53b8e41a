//! The fixed front-page layout.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKind {
    MainStory,
    TextTop,
    Quote,
    PromoStrip,
    MediumArticle,
    SmallNotice,
}

impl SlotKind {
    /// CSS class carried by the slot element.
    pub fn class(self) -> &'static str {
        match self {
            SlotKind::MainStory => "huvudnyhet",
            SlotKind::TextTop => "texttopp",
            SlotKind::Quote => "citat",
            SlotKind::PromoStrip => "puff-strip",
            SlotKind::MediumArticle => "mellan",
            SlotKind::SmallNotice => "liten",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub name: &'static str,
    pub kind: SlotKind,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Every slot on the page, in reading order.
pub const LAYOUT: [Slot; 9] = [
    Slot { name: "puff1", kind: SlotKind::PromoStrip },
    Slot { name: "puff2", kind: SlotKind::PromoStrip },
    Slot { name: "puff3", kind: SlotKind::PromoStrip },
    Slot { name: "texttopp", kind: SlotKind::TextTop },
    Slot { name: "huvudnyhet", kind: SlotKind::MainStory },
    Slot { name: "mellan1", kind: SlotKind::MediumArticle },
    Slot { name: "citat", kind: SlotKind::Quote },
    Slot { name: "liten1", kind: SlotKind::SmallNotice },
    Slot { name: "liten2", kind: SlotKind::SmallNotice },
];

pub fn slot(name: &str) -> Option<Slot> {
    LAYOUT.iter().copied().find(|s| s.name == name)
}

pub fn slots_of(kind: SlotKind) -> impl Iterator<Item = Slot> {
    LAYOUT.into_iter().filter(move |s| s.kind == kind)
}
