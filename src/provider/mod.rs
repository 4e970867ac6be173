pub mod error;
pub mod mock;
pub mod seed;

use async_trait::async_trait;

use crate::entities::{Article, ArticleId, Category, CategoryId, User, UserId};

pub use error::ProviderError;
pub use mock::MockDatabaseProvider;
pub use seed::Seed;

/// Storage backend behind the HTTP handlers.
///
/// Listings take the raw `page` and `page_size` a client sent; implementations
/// clamp the size and treat a negative page as the first one. Lookups that find
/// nothing return `Ok(None)` rather than an error.
#[async_trait]
pub trait DatabaseProvider: Send + Sync {
    /// Appends an empty article owned by `author_id` and returns its id.
    async fn create_new_article(&self, author_id: UserId) -> Result<ArticleId, ProviderError>;

    async fn get_article_by_id(&self, id: ArticleId) -> Result<Option<Article>, ProviderError>;

    async fn get_category_by_id(&self, id: CategoryId) -> Result<Option<Category>, ProviderError>;

    async fn get_user_by_id(&self, id: UserId) -> Result<Option<User>, ProviderError>;

    async fn list_articles(&self, page: i64, page_size: i64) -> Result<Vec<Article>, ProviderError>;

    async fn list_articles_by_category(
        &self,
        category_id: CategoryId,
        page: i64,
        page_size: i64,
    ) -> Result<Vec<Article>, ProviderError>;

    async fn list_articles_by_author(
        &self,
        author_id: UserId,
        page: i64,
        page_size: i64,
    ) -> Result<Vec<Article>, ProviderError>;

    async fn list_categories(
        &self,
        page: i64,
        page_size: i64,
    ) -> Result<Vec<Category>, ProviderError>;

    async fn list_users(&self, page: i64, page_size: i64) -> Result<Vec<User>, ProviderError>;

    /// Removes the article. `Ok(false)` when no article has that id.
    async fn delete_article_by_id(&self, id: ArticleId) -> Result<bool, ProviderError>;

    /// Overwrites every field of the stored article except its id.
    /// `Ok(false)` when no article has that id.
    async fn update_article_by_id(
        &self,
        id: ArticleId,
        article: Article,
    ) -> Result<bool, ProviderError>;
}
