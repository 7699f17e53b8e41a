//! Read-only article catalog.
//!
//! Articles come either from the flat list or from a named package. Lookups
//! search the flat list first, then each package in order. Nothing mutates a
//! catalog after it has been built.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque article identifier. The page data may carry ids as JSON numbers or
/// strings; both end up as the same string form so comparisons are textual.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArticleId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for ArticleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
            Float(f64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => ArticleId(s),
            Raw::Int(n) => ArticleId(n.to_string()),
            Raw::Float(f) => ArticleId(f.to_string()),
        })
    }
}

fn text_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub headline: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub subheadline: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub body: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub quote_sender: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
}

impl Article {
    pub fn new(id: impl Into<String>, headline: impl Into<String>) -> Self {
        Self {
            id: ArticleId::new(id),
            headline: headline.into(),
            subheadline: String::new(),
            category: String::new(),
            body: String::new(),
            image: None,
            quote: None,
            quote_sender: None,
            page: None,
        }
    }

    pub fn image(&self) -> Option<&str> {
        non_empty(self.image.as_deref())
    }

    pub fn quote(&self) -> Option<&str> {
        non_empty(self.quote.as_deref())
    }

    pub fn quote_sender(&self) -> Option<&str> {
        non_empty(self.quote_sender.as_deref())
    }

    /// Explicit page number. Zero counts as absent.
    pub fn page(&self) -> Option<u32> {
        self.page.filter(|p| *p > 0)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Named group of articles offered as an alternate sidebar source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub articles: Vec<Article>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    articles: Vec<Article>,
    packages: Vec<Package>,
}

impl Catalog {
    pub fn new(articles: Vec<Article>, packages: Vec<Package>) -> Self {
        Self { articles, packages }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn package(&self, id: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&Article> {
        self.articles
            .iter()
            .find(|a| a.id.as_str() == id)
            .or_else(|| {
                self.packages
                    .iter()
                    .flat_map(|p| p.articles.iter())
                    .find(|a| a.id.as_str() == id)
            })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Rewrites every category (packages included) into the closed set the
    /// newspaper prints.
    pub fn normalize_categories(&mut self) {
        let all = self
            .articles
            .iter_mut()
            .chain(self.packages.iter_mut().flat_map(|p| p.articles.iter_mut()));
        for article in all {
            article.category = infer_category(article).to_string();
        }
    }
}

pub const CATEGORIES: [&str; 10] = [
    "NÖJE",
    "ÅSIKT",
    "KARLSHAMN",
    "RONNEBY",
    "SÖLVESBORG",
    "KARLSKRONA",
    "OLOFSTRÖM",
    "REGION",
    "NÄRINGSLIV",
    "SPORT",
];

const TOWNS: [(&str, &str); 7] = [
    ("karlshamn", "KARLSHAMN"),
    ("karlskrona", "KARLSKRONA"),
    ("ronneby", "RONNEBY"),
    ("sölvesborg", "SÖLVESBORG"),
    ("solvesborg", "SÖLVESBORG"),
    ("olofström", "OLOFSTRÖM"),
    ("olofstrom", "OLOFSTRÖM"),
];

const BUSINESS: [&str; 7] = ["företag", "näringsliv", "ekonomi", "investering", "arbets", "priser", "omsättning"];
const OPINION: [&str; 7] = ["åsikt", "debatt", "insändare", "tycker", "menar", "ledare", "åsikter"];
const ENTERTAINMENT: [&str; 7] = ["konsert", "teater", "kultur", "festival", "nöje", "premiär", "recension"];
const SPORTS: [&str; 8] = ["match", "mål", "cupen", "serie", "handboll", "hockey", "fotboll", "hk "];

/// Picks a category from the article text. Town mentions win, then keyword
/// groups, then a valid original category, then REGION.
pub fn infer_category(article: &Article) -> &'static str {
    let text = format!("{}\n{}\n{}", article.headline, article.subheadline, article.body).to_lowercase();

    if let Some(town) = TOWNS.iter().find(|(k, _)| text.contains(k)).map(|(_, town)| *town) {
        return town;
    }
    if mentions(&text, &BUSINESS) {
        return "NÄRINGSLIV";
    }
    if mentions(&text, &OPINION) {
        return "ÅSIKT";
    }
    if mentions(&text, &ENTERTAINMENT) {
        return "NÖJE";
    }
    if mentions(&text, &SPORTS) {
        // towns were already ruled out above
        return "REGION";
    }

    let original = article.category.trim().to_uppercase();
    CATEGORIES
        .iter()
        .find(|c| **c == original)
        .copied()
        .unwrap_or("REGION")
}

fn mentions(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}
