pub mod handlers;
pub mod query;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{paging::PageSizeValidator, provider::DatabaseProvider};

pub const API_PREFIX: &str = "/api/Articles";

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn DatabaseProvider>,
    pub validator: PageSizeValidator,
}

impl AppState {
    pub fn new(provider: Arc<dyn DatabaseProvider>, validator: PageSizeValidator) -> Self {
        Self {
            provider,
            validator,
        }
    }
}

fn articles_routes() -> Router<AppState> {
    Router::new()
        .route("/GetArticlesPreviews", get(handlers::get_articles_previews))
        .route("/GetArticleById", get(handlers::get_article_by_id))
        .route("/GetArticleById/{id}", get(handlers::get_article_by_id))
        .route("/GetUserById", get(handlers::get_user_by_id))
        .route("/GetUserById/{id}", get(handlers::get_user_by_id))
        .route("/GetCategoryById", get(handlers::get_category_by_id))
        .route("/GetCategoryById/{id}", get(handlers::get_category_by_id))
        .route(
            "/GetArticlesPreviewsByCategory",
            get(handlers::get_articles_previews_by_category),
        )
        .route(
            "/GetArticlesPreviewsByAuthor",
            get(handlers::get_articles_previews_by_author),
        )
        .route("/GetCategories", get(handlers::get_categories))
        .route("/GetUsers", get(handlers::get_users))
        .route("/DeleteArticleById", get(handlers::delete_article_by_id))
        .route("/DeleteArticleById/{id}", get(handlers::delete_article_by_id))
        .route("/UpdateArticleById", post(handlers::update_article_by_id))
        .route("/CreateNewArticle", post(handlers::create_new_article))
}

/// Full application: health probe, the articles API, request tracing and open CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .nest(API_PREFIX, articles_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
