//! Initial data injected by the host page.
//!
//! The page embeds a JSON block (`<script id="app-data">`). Older pages ship a
//! bare article array; newer ones ship `{ articles, packages, charLimits }`.

use dioxus::logger::tracing::info;
use serde::{Deserialize, Serialize};

use crate::catalog::{Article, Catalog, Package};
use crate::error::Result;

/// Element id of the embedded JSON block.
pub const APP_DATA_ELEMENT: &str = "app-data";

/// Data used when the host page embeds nothing.
pub const BUNDLED_PAGE_DATA: &str = include_str!("../assets/frontpage.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharLimits {
    pub puff: usize,
    pub headline: usize,
    pub ingress: usize,
    pub mellan_rubrik: usize,
    pub mellan_ingress: usize,
    pub liten_rubrik: usize,
    pub liten_ingress: usize,
}

impl Default for CharLimits {
    fn default() -> Self {
        Self {
            puff: 40,
            headline: 70,
            ingress: 120,
            mellan_rubrik: 45,
            mellan_ingress: 200,
            liten_rubrik: 30,
            liten_ingress: 120,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageData {
    pub articles: Vec<Article>,
    pub packages: Vec<Package>,
    pub char_limits: CharLimits,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPageData {
    List(Vec<Article>),
    Full {
        #[serde(default)]
        articles: Vec<Article>,
        #[serde(default)]
        packages: Vec<Package>,
        #[serde(default, rename = "charLimits")]
        char_limits: CharLimits,
    },
}

impl PageData {
    pub fn from_json(json: &str) -> Result<Self> {
        let data = match serde_json::from_str::<RawPageData>(json)? {
            RawPageData::List(articles) => PageData {
                articles,
                ..PageData::default()
            },
            RawPageData::Full {
                articles,
                packages,
                char_limits,
            } => PageData {
                articles,
                packages,
                char_limits,
            },
        };
        info!(
            articles = data.articles.len(),
            packages = data.packages.len(),
            "page data loaded"
        );
        Ok(data)
    }

    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_PAGE_DATA)
    }

    /// Builds the catalog with categories normalised to the printed set.
    pub fn into_catalog(self) -> (Catalog, CharLimits) {
        let mut catalog = Catalog::new(self.articles, self.packages);
        catalog.normalize_categories();
        (catalog, self.char_limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_article_list() {
        let data = PageData::from_json(r#"[{"id": 1, "headline": "A"}]"#).unwrap();
        assert_eq!(data.articles.len(), 1);
        assert!(data.packages.is_empty());
        assert_eq!(data.char_limits, CharLimits::default());
    }

    #[test]
    fn partial_char_limits_keep_defaults() {
        let data = PageData::from_json(
            r#"{"articles": [], "charLimits": {"headline": 50, "litenRubrik": 20}}"#,
        )
        .unwrap();
        assert_eq!(data.char_limits.headline, 50);
        assert_eq!(data.char_limits.liten_rubrik, 20);
        assert_eq!(data.char_limits.ingress, 120);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(PageData::from_json("{not json").is_err());
    }

    #[test]
    fn bundled_data_parses() {
        let data = PageData::bundled().unwrap();
        assert!(!data.articles.is_empty());
    }
}
