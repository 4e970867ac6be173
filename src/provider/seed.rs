use std::collections::HashSet;

use chrono::Utc;
use uuid::Uuid;

use crate::entities::{Article, ArticleId, Category, CategoryId, User, UserId};
use crate::provider::ProviderError;

/// Initial contents of a mock store.
#[derive(Debug, Clone, Default)]
pub struct Seed {
    pub categories: Vec<Category>,
    pub users: Vec<User>,
    pub articles: Vec<Article>,
}

impl Seed {
    /// Two categories, two users and three articles cross-linked between them.
    pub fn sample() -> Self {
        let categories = vec![
            Category::new(CategoryId::generate(), "category1", "category1 description"),
            Category::new(CategoryId::generate(), "category2", "category2 description"),
        ];
        let users = vec![
            User::new(UserId::generate(), "user1"),
            User::new(UserId::generate(), "user2"),
        ];

        let articles = vec![
            sample_article(
                1,
                vec![categories[0].id, categories[1].id],
                vec![users[0].id],
            ),
            sample_article(2, vec![categories[0].id], vec![users[1].id]),
            sample_article(3, vec![categories[1].id], vec![users[0].id, users[1].id]),
        ];

        Self {
            categories,
            users,
            articles,
        }
    }

    pub fn ensure_unique_ids(&self) -> Result<(), ProviderError> {
        let duplicates = [
            ("category", first_duplicate(self.categories.iter().map(|c| c.id.as_uuid()))),
            ("user", first_duplicate(self.users.iter().map(|u| u.id.as_uuid()))),
            ("article", first_duplicate(self.articles.iter().map(|a| a.id.as_uuid()))),
        ];

        match duplicates.into_iter().find_map(|(kind, id)| Some((kind, id?))) {
            Some((kind, id)) => Err(ProviderError::DuplicateId { kind, id }),
            None => Ok(()),
        }
    }
}

fn sample_article(n: u32, categories: Vec<CategoryId>, authors: Vec<UserId>) -> Article {
    Article {
        id: ArticleId::generate(),
        name: format!("article{n}"),
        preview: format!("preview{n}"),
        description: format!("description{n}"),
        content: format!("content{n}"),
        categories,
        authors,
        date: Utc::now(),
        is_favorite: false,
        is_visible: true,
    }
}

fn first_duplicate(mut ids: impl Iterator<Item = Uuid>) -> Option<Uuid> {
    let mut seen = HashSet::new();
    ids.find(|id| !seen.insert(*id))
}
