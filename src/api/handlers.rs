use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json, Response},
};
use bytes::Bytes;
use serde_json::json;
use tracing::{info, warn};

use crate::{
    api::{
        query::{AuthorQuery, CategoryQuery, PageQuery, RequestedId},
        AppState,
    },
    entities::{Article, ArticleId, ArticlePreview, Category, CategoryId, User, UserId},
    error::RestError,
};

fn previews(articles: Vec<Article>) -> Vec<ArticlePreview> {
    articles.iter().map(ArticlePreview::from).collect()
}

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn get_articles_previews(
    State(state): State<AppState>,
    Query(paging): Query<PageQuery>,
) -> Result<Json<Vec<ArticlePreview>>, RestError> {
    let paging = paging.clamped(&state.validator);
    let articles = state
        .provider
        .list_articles(paging.page, paging.page_size)
        .await?;

    Ok(Json(previews(articles)))
}

pub async fn get_article_by_id(
    State(state): State<AppState>,
    RequestedId(id): RequestedId<ArticleId>,
) -> Result<Json<Option<Article>>, RestError> {
    Ok(Json(state.provider.get_article_by_id(id).await?))
}

pub async fn get_user_by_id(
    State(state): State<AppState>,
    RequestedId(id): RequestedId<UserId>,
) -> Result<Json<Option<User>>, RestError> {
    Ok(Json(state.provider.get_user_by_id(id).await?))
}

pub async fn get_category_by_id(
    State(state): State<AppState>,
    RequestedId(id): RequestedId<CategoryId>,
) -> Result<Json<Option<Category>>, RestError> {
    Ok(Json(state.provider.get_category_by_id(id).await?))
}

pub async fn get_articles_previews_by_category(
    State(state): State<AppState>,
    Query(CategoryQuery { category_id }): Query<CategoryQuery>,
    Query(paging): Query<PageQuery>,
) -> Result<Json<Vec<ArticlePreview>>, RestError> {
    let paging = paging.clamped(&state.validator);
    let articles = state
        .provider
        .list_articles_by_category(category_id, paging.page, paging.page_size)
        .await?;

    Ok(Json(previews(articles)))
}

pub async fn get_articles_previews_by_author(
    State(state): State<AppState>,
    Query(AuthorQuery { author_id }): Query<AuthorQuery>,
    Query(paging): Query<PageQuery>,
) -> Result<Json<Vec<ArticlePreview>>, RestError> {
    let paging = paging.clamped(&state.validator);
    let articles = state
        .provider
        .list_articles_by_author(author_id, paging.page, paging.page_size)
        .await?;

    Ok(Json(previews(articles)))
}

pub async fn get_categories(
    State(state): State<AppState>,
    Query(paging): Query<PageQuery>,
) -> Result<Json<Vec<Category>>, RestError> {
    let paging = paging.clamped(&state.validator);
    Ok(Json(
        state
            .provider
            .list_categories(paging.page, paging.page_size)
            .await?,
    ))
}

pub async fn get_users(
    State(state): State<AppState>,
    Query(paging): Query<PageQuery>,
) -> Result<Json<Vec<User>>, RestError> {
    let paging = paging.clamped(&state.validator);
    Ok(Json(
        state
            .provider
            .list_users(paging.page, paging.page_size)
            .await?,
    ))
}

pub async fn create_new_article(
    State(state): State<AppState>,
    Query(AuthorQuery { author_id }): Query<AuthorQuery>,
) -> Result<Json<ArticleId>, RestError> {
    Ok(Json(state.provider.create_new_article(author_id).await?))
}

/// Always answers with a boolean. A missing or malformed id and provider
/// failures are logged and reported as `false`.
pub async fn delete_article_by_id(
    State(state): State<AppState>,
    requested: Result<RequestedId<ArticleId>, Response>,
) -> Json<bool> {
    let id = match requested {
        Ok(RequestedId(id)) => id,
        Err(rejection) => {
            warn!("Delete without a usable article id ({})", rejection.status());
            return Json(false);
        }
    };

    match state.provider.delete_article_by_id(id).await {
        Ok(deleted) => Json(deleted),
        Err(e) => {
            warn!("Delete of article {id} failed: {e}");
            Json(false)
        }
    }
}

/// Reads a full article from the raw body. Anything that is not a complete
/// article, or an update the provider rejects, yields `false`.
pub async fn update_article_by_id(State(state): State<AppState>, body: Bytes) -> Json<bool> {
    match apply_update(&state, &body).await {
        Ok(updated) => Json(updated),
        Err(e) => {
            warn!("Rejected article update ({} bytes): {e}", body.len());
            Json(false)
        }
    }
}

async fn apply_update(state: &AppState, body: &[u8]) -> Result<bool, RestError> {
    let article: Article = serde_json::from_slice(body)?;
    let id = article.id;

    info!("Update requested for article {id}");
    Ok(state.provider.update_article_by_id(id, article).await?)
}
