use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{date as wire_date, ArticleId, CategoryId, UserId};

/// Written with PascalCase keys. Reading also accepts the camelCase spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Article {
    #[serde(alias = "id")]
    pub id: ArticleId,
    #[serde(alias = "name")]
    pub name: String,
    #[serde(alias = "preview")]
    pub preview: String,
    #[serde(alias = "description")]
    pub description: String,
    #[serde(alias = "content")]
    pub content: String,
    #[serde(alias = "categories")]
    pub categories: Vec<CategoryId>,
    #[serde(alias = "authors")]
    pub authors: Vec<UserId>,
    #[serde(alias = "date", with = "wire_date")]
    pub date: DateTime<Utc>,
    #[serde(alias = "isFavorite")]
    pub is_favorite: bool,
    #[serde(alias = "isVisible")]
    pub is_visible: bool,
}

impl Article {
    /// Empty, visible article owned by a single author and dated now.
    pub fn shell(author: UserId) -> Self {
        Self {
            id: ArticleId::generate(),
            name: String::new(),
            preview: String::new(),
            description: String::new(),
            content: String::new(),
            categories: Vec::new(),
            authors: vec![author],
            date: Utc::now(),
            is_favorite: false,
            is_visible: true,
        }
    }

    pub fn has_category(&self, category: CategoryId) -> bool {
        self.categories.contains(&category)
    }

    pub fn has_author(&self, author: UserId) -> bool {
        self.authors.contains(&author)
    }

    /// Replaces every field with `replacement`'s, keeping this article's id.
    pub fn overwrite(&mut self, replacement: Article) {
        *self = Article {
            id: self.id,
            ..replacement
        };
    }

    pub fn preview(&self) -> ArticlePreview {
        ArticlePreview::from(self)
    }
}

/// Listing projection of an [`Article`] without its body text and flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArticlePreview {
    pub id: ArticleId,
    pub name: String,
    pub preview: String,
    pub categories: Vec<CategoryId>,
    pub authors: Vec<UserId>,
    #[serde(with = "wire_date")]
    pub date: DateTime<Utc>,
}

impl From<&Article> for ArticlePreview {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            name: article.name.clone(),
            preview: article.preview.clone(),
            categories: article.categories.clone(),
            authors: article.authors.clone(),
            date: article.date,
        }
    }
}
