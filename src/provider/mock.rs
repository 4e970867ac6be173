use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::entities::{Article, ArticleId, Category, CategoryId, User, UserId};
use crate::paging::{Page, PageSizeValidator};
use crate::provider::{DatabaseProvider, ProviderError, Seed};

/// All three collections share one lock so writes never interleave with reads.
#[derive(Debug, Default)]
struct Store {
    articles: Vec<Article>,
    categories: Vec<Category>,
    users: Vec<User>,
}

/// In-memory provider seeded once at start-up. Collections keep insertion order.
#[derive(Debug)]
pub struct MockDatabaseProvider {
    store: RwLock<Store>,
    validator: PageSizeValidator,
}

impl MockDatabaseProvider {
    pub fn new(seed: Seed, validator: PageSizeValidator) -> Result<Self, ProviderError> {
        seed.ensure_unique_ids()?;

        info!(
            "Seeded mock store: {} articles, {} categories, {} users",
            seed.articles.len(),
            seed.categories.len(),
            seed.users.len()
        );

        Ok(Self {
            store: RwLock::new(Store {
                articles: seed.articles,
                categories: seed.categories,
                users: seed.users,
            }),
            validator,
        })
    }

    fn page(&self, page: i64, page_size: i64) -> Page {
        self.validator.page(page, page_size)
    }

    async fn collect_articles<F>(&self, page: Page, keep: F) -> Vec<Article>
    where
        F: Fn(&Article) -> bool + Send,
    {
        let store = self.store.read().await;
        page.slice(store.articles.iter().filter(|article| keep(*article)))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl DatabaseProvider for MockDatabaseProvider {
    async fn create_new_article(&self, author_id: UserId) -> Result<ArticleId, ProviderError> {
        let mut store = self.store.write().await;

        let article = Article::shell(author_id);
        let id = article.id;
        store.articles.push(article);

        info!("Created article {id} for author {author_id}");
        Ok(id)
    }

    async fn get_article_by_id(&self, id: ArticleId) -> Result<Option<Article>, ProviderError> {
        let store = self.store.read().await;
        Ok(store.articles.iter().find(|article| article.id == id).cloned())
    }

    async fn get_category_by_id(
        &self,
        id: CategoryId,
    ) -> Result<Option<Category>, ProviderError> {
        let store = self.store.read().await;
        Ok(store.categories.iter().find(|category| category.id == id).cloned())
    }

    async fn get_user_by_id(&self, id: UserId) -> Result<Option<User>, ProviderError> {
        let store = self.store.read().await;
        Ok(store.users.iter().find(|user| user.id == id).cloned())
    }

    async fn list_articles(
        &self,
        page: i64,
        page_size: i64,
    ) -> Result<Vec<Article>, ProviderError> {
        Ok(self
            .collect_articles(self.page(page, page_size), |_| true)
            .await)
    }

    async fn list_articles_by_category(
        &self,
        category_id: CategoryId,
        page: i64,
        page_size: i64,
    ) -> Result<Vec<Article>, ProviderError> {
        Ok(self
            .collect_articles(self.page(page, page_size), |article| {
                article.has_category(category_id)
            })
            .await)
    }

    async fn list_articles_by_author(
        &self,
        author_id: UserId,
        page: i64,
        page_size: i64,
    ) -> Result<Vec<Article>, ProviderError> {
        Ok(self
            .collect_articles(self.page(page, page_size), |article| {
                article.has_author(author_id)
            })
            .await)
    }

    async fn list_categories(
        &self,
        page: i64,
        page_size: i64,
    ) -> Result<Vec<Category>, ProviderError> {
        let store = self.store.read().await;
        Ok(self
            .page(page, page_size)
            .slice(&store.categories)
            .cloned()
            .collect())
    }

    async fn list_users(&self, page: i64, page_size: i64) -> Result<Vec<User>, ProviderError> {
        let store = self.store.read().await;
        Ok(self
            .page(page, page_size)
            .slice(&store.users)
            .cloned()
            .collect())
    }

    async fn delete_article_by_id(&self, id: ArticleId) -> Result<bool, ProviderError> {
        let mut store = self.store.write().await;

        match store.articles.iter().position(|article| article.id == id) {
            Some(index) => {
                store.articles.remove(index);
                info!("Deleted article {id}");
                Ok(true)
            }
            None => {
                debug!("No article {id} to delete");
                Ok(false)
            }
        }
    }

    async fn update_article_by_id(
        &self,
        id: ArticleId,
        article: Article,
    ) -> Result<bool, ProviderError> {
        let mut store = self.store.write().await;

        match store.articles.iter_mut().find(|stored| stored.id == id) {
            Some(stored) => {
                stored.overwrite(article);
                info!("Updated article {id}");
                Ok(true)
            }
            None => {
                debug!("No article {id} to update");
                Ok(false)
            }
        }
    }
}
