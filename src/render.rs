//! Slot renderer: turns (slot kind, article) into view content.
//!
//! Output is a plain view model; the UI layer binds it to markup. Missing
//! page numbers are rolled through a [`PageRoll`] each time content is
//! rendered, so an article without a page shows a fresh number per placement.

use crate::catalog::{Article, ArticleId, Catalog};
use crate::page_data::CharLimits;
use crate::slot::{Slot, SlotKind};
use crate::store::SlotStore;
use crate::text::{capitalize, quoted, truncate};

/// Headline length for promo strips and, when clamped, feature slots.
pub const SHORT_HEADLINE_LIMIT: usize = 37;

pub const MIN_ROLLED_PAGE: u32 = 2;
pub const MAX_ROLLED_PAGE: u32 = 11;

/// Source of synthesized page numbers.
pub trait PageRoll {
    fn roll(&mut self) -> u32;
}

impl<F: FnMut() -> u32> PageRoll for F {
    fn roll(&mut self) -> u32 {
        self()
    }
}

/// Uniform page numbers from the browser's `Math.random`.
pub struct BrowserDice;

impl PageRoll for BrowserDice {
    fn roll(&mut self) -> u32 {
        (js_sys::Math::random() * 10.0).floor() as u32 + MIN_ROLLED_PAGE
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SlotContent {
    Placeholder {
        prompt: String,
        image_area: bool,
    },
    Promo {
        category: String,
        headline: String,
        page: String,
    },
    TextTop {
        headline: String,
        subheadline: String,
        page: String,
    },
    Quote {
        quote: String,
        sender: String,
        page: String,
    },
    MainStory {
        headline: String,
        subheadline: String,
        image: Option<String>,
        alt: String,
        page: String,
    },
    Feature {
        headline: String,
        page: String,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SlotView {
    pub slot: Slot,
    pub article: Option<ArticleId>,
    pub content: SlotContent,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub limits: CharLimits,
    /// Clamp medium/small headlines to [`SHORT_HEADLINE_LIMIT`].
    pub clamp_feature_headlines: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            limits: CharLimits::default(),
            clamp_feature_headlines: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// View for a slot as the store currently has it.
    pub fn render_slot(&self, store: &SlotStore, catalog: &Catalog, slot: Slot, dice: &mut impl PageRoll) -> SlotView {
        let article = store.get(slot.name).and_then(|id| catalog.find(id.as_str()));
        SlotView {
            slot,
            article: article.map(|a| a.id.clone()),
            content: match article {
                Some(article) => self.render(slot, article, dice),
                None => placeholder(slot),
            },
        }
    }

    pub fn render(&self, slot: Slot, article: &Article, dice: &mut impl PageRoll) -> SlotContent {
        let limits = &self.config.limits;
        let page = page_number(article, dice);

        match slot.kind {
            SlotKind::PromoStrip => SlotContent::Promo {
                category: format!("{}.", capitalize(&article.category)),
                headline: truncate(&article.headline, SHORT_HEADLINE_LIMIT),
                page: format!("Sidan {page}"),
            },
            SlotKind::TextTop => SlotContent::TextTop {
                headline: truncate(&article.headline, limits.headline),
                subheadline: truncate(&article.subheadline, limits.ingress),
                page: page_line(&article.category, page),
            },
            SlotKind::Quote => SlotContent::Quote {
                quote: quoted(article.quote().unwrap_or(&article.headline)),
                sender: article.quote_sender().unwrap_or(&article.category).to_string(),
                page: page_line(&article.category, page),
            },
            SlotKind::MainStory => SlotContent::MainStory {
                headline: truncate(&article.headline, limits.headline),
                subheadline: article.subheadline.clone(),
                image: article.image().map(str::to_string),
                alt: article.headline.clone(),
                page: format!("Sidan {page}"),
            },
            SlotKind::MediumArticle | SlotKind::SmallNotice => SlotContent::Feature {
                headline: if self.config.clamp_feature_headlines {
                    truncate(&article.headline, SHORT_HEADLINE_LIMIT)
                } else {
                    article.headline.clone()
                },
                page: page_line(&article.category, page),
            },
        }
    }
}

/// Prompt shown in an empty slot.
pub fn placeholder(slot: Slot) -> SlotContent {
    let prompt = match slot.kind {
        SlotKind::MainStory => "Dra en huvudnyhet hit".to_string(),
        SlotKind::TextTop => "Dra en texttopp hit".to_string(),
        SlotKind::Quote => "Dra ett citat hit".to_string(),
        SlotKind::SmallNotice => "Dra en notis hit".to_string(),
        SlotKind::MediumArticle => "Dra en artikel hit".to_string(),
        SlotKind::PromoStrip => {
            let number = slot.name.trim_start_matches("puff");
            format!("Dra toppnotis {number} hit")
        }
    };
    SlotContent::Placeholder {
        prompt,
        image_area: slot.kind == SlotKind::MainStory,
    }
}

fn page_number(article: &Article, dice: &mut impl PageRoll) -> u32 {
    article
        .page()
        .unwrap_or_else(|| dice.roll().clamp(MIN_ROLLED_PAGE, MAX_ROLLED_PAGE))
}

/// "Sport sidan 4", or "Sidan 4" when there is no category.
pub fn page_line(category: &str, page: u32) -> String {
    let category = capitalize(category);
    if category.is_empty() {
        format!("Sidan {page}")
    } else {
        format!("{category} sidan {page}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::slot;

    fn fixed(page: u32) -> impl FnMut() -> u32 {
        move || page
    }

    #[test]
    fn page_line_formats() {
        assert_eq!(page_line("SPORT", 4), "Sport sidan 4");
        assert_eq!(page_line("", 4), "Sidan 4");
    }

    #[test]
    fn explicit_page_wins_over_roll() {
        let mut article = Article::new("1", "h");
        article.page = Some(9);
        let content = Renderer::default().render(slot("puff1").unwrap(), &article, &mut fixed(3));
        assert!(matches!(content, SlotContent::Promo { ref page, .. } if page == "Sidan 9"));
    }

    #[test]
    fn rolled_pages_stay_in_range() {
        let article = Article::new("1", "h");
        let renderer = Renderer::default();
        let content = renderer.render(slot("texttopp").unwrap(), &article, &mut fixed(40));
        assert!(matches!(content, SlotContent::TextTop { ref page, .. } if page == "Sidan 11"));
    }

    #[test]
    fn promo_placeholder_uses_slot_number() {
        assert_eq!(
            placeholder(slot("puff2").unwrap()),
            SlotContent::Placeholder {
                prompt: "Dra toppnotis 2 hit".into(),
                image_area: false,
            }
        );
    }
}
