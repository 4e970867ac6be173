use std::sync::Arc;

use axum::http::{
    header::{ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN},
    HeaderValue,
};
use axum_test::TestServer;
use chrono::NaiveDateTime;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use articles_api::{
    api::{router, AppState},
    entities::{date, Article, ArticleId, ArticlePreview, Category, User, UserId},
    paging::PageSizeValidator,
    provider::{MockDatabaseProvider, Seed},
};

fn server_with(max_page_size: usize) -> (TestServer, Seed) {
    let seed = Seed::sample();
    let validator = PageSizeValidator::new(max_page_size);
    let provider = MockDatabaseProvider::new(seed.clone(), validator).unwrap();
    let server = TestServer::new(router(AppState::new(Arc::new(provider), validator))).unwrap();
    (server, seed)
}

fn server() -> (TestServer, Seed) {
    server_with(100)
}

fn names(previews: &[ArticlePreview]) -> Vec<&str> {
    previews.iter().map(|p| p.name.as_str()).collect()
}

#[tokio::test]
async fn test_health() {
    let (server, _) = server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_previews_default_paging() {
    let (server, _) = server();

    let response = server.get("/api/Articles/GetArticlesPreviews").await;
    response.assert_status_ok();

    let previews: Vec<ArticlePreview> = response.json();
    assert_eq!(names(&previews), vec!["article1", "article2", "article3"]);

    let raw: Vec<Value> = response.json();
    assert!(raw[0].get("Content").is_none());
    assert!(raw[0].get("IsVisible").is_none());
}

#[tokio::test]
async fn test_previews_second_page() {
    let (server, _) = server();

    let previews: Vec<ArticlePreview> = server
        .get("/api/Articles/GetArticlesPreviews")
        .add_query_param("page", 1)
        .add_query_param("pageSize", 2)
        .await
        .json();

    assert_eq!(names(&previews), vec!["article3"]);
}

#[tokio::test]
async fn test_page_size_is_clamped() {
    let (server, _) = server_with(2);

    let too_big: Vec<ArticlePreview> = server
        .get("/api/Articles/GetArticlesPreviews")
        .add_query_param("pageSize", 1000)
        .await
        .json();
    assert_eq!(too_big.len(), 2);

    let zero: Vec<Category> = server
        .get("/api/Articles/GetCategories")
        .add_query_param("pageSize", 0)
        .await
        .json();
    assert_eq!(zero.len(), 1);
}

#[tokio::test]
async fn test_out_of_range_page_is_empty() {
    let (server, _) = server();

    let users: Vec<User> = server
        .get("/api/Articles/GetUsers")
        .add_query_param("page", 40)
        .await
        .json();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_get_article_by_query_and_path() {
    let (server, seed) = server();
    let expected = &seed.articles[0];

    let by_query = server
        .get("/api/Articles/GetArticleById")
        .add_query_param("id", expected.id)
        .await;
    by_query.assert_status_ok();

    let by_path = server
        .get(&format!("/api/Articles/GetArticleById/{}", expected.id))
        .await;

    let from_query: Article = by_query.json();
    let from_path: Article = by_path.json();
    assert_eq!(from_query, from_path);
    assert_eq!(from_query.name, expected.name);
    assert_eq!(from_query.categories, expected.categories);
    assert_eq!(from_query.authors, expected.authors);
}

#[tokio::test]
async fn test_date_wire_format() {
    let (server, seed) = server();

    let raw: Value = server
        .get("/api/Articles/GetArticleById")
        .add_query_param("id", seed.articles[1].id)
        .await
        .json();

    let rendered = raw["Date"].as_str().unwrap();
    assert_eq!(rendered.len(), 19);
    assert!(NaiveDateTime::parse_from_str(rendered, date::FORMAT).is_ok());
}

#[tokio::test]
async fn test_unknown_ids_return_null() {
    let (server, _) = server();
    let unknown = ArticleId::generate();

    for endpoint in ["GetArticleById", "GetUserById", "GetCategoryById"] {
        let response = server
            .get(&format!("/api/Articles/{endpoint}"))
            .add_query_param("id", unknown)
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), Value::Null, "{endpoint}");
    }
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let (server, _) = server();

    server
        .get("/api/Articles/GetArticleById")
        .add_query_param("id", "not-a-guid")
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_malformed_path_id_reports_the_path() {
    let (server, _) = server();

    let response = server
        .get("/api/Articles/GetArticleById/not-a-guid")
        .await;
    response.assert_status_bad_request();

    let message = response.text();
    assert!(!message.contains("missing field"), "{message}");
}

#[tokio::test]
async fn test_user_and_category_lookup() {
    let (server, seed) = server();

    let user: User = server
        .get(&format!("/api/Articles/GetUserById/{}", seed.users[1].id))
        .await
        .json();
    assert_eq!(user, seed.users[1]);

    let category: Category = server
        .get("/api/Articles/GetCategoryById")
        .add_query_param("id", seed.categories[0].id)
        .await
        .json();
    assert_eq!(category, seed.categories[0]);
}

#[tokio::test]
async fn test_previews_by_category_and_author() {
    let (server, seed) = server();

    let by_category: Vec<ArticlePreview> = server
        .get("/api/Articles/GetArticlesPreviewsByCategory")
        .add_query_param("categoryId", seed.categories[1].id)
        .await
        .json();
    assert_eq!(names(&by_category), vec!["article1", "article3"]);

    let by_author: Vec<ArticlePreview> = server
        .get("/api/Articles/GetArticlesPreviewsByAuthor")
        .add_query_param("authorId", seed.users[1].id)
        .add_query_param("pageSize", 1)
        .await
        .json();
    assert_eq!(names(&by_author), vec!["article2"]);
}

#[tokio::test]
async fn test_delete_article() {
    let (server, seed) = server();
    let id = seed.articles[1].id;

    let deleted: bool = server
        .get("/api/Articles/DeleteArticleById")
        .add_query_param("id", id)
        .await
        .json();
    assert!(deleted);

    let again: bool = server
        .get(&format!("/api/Articles/DeleteArticleById/{id}"))
        .await
        .json();
    assert!(!again);

    let remaining: Vec<ArticlePreview> = server
        .get("/api/Articles/GetArticlesPreviews")
        .await
        .json();
    assert_eq!(names(&remaining), vec!["article1", "article3"]);
}

#[tokio::test]
async fn test_delete_without_usable_id_is_false() {
    let (server, _) = server();

    let missing = server.get("/api/Articles/DeleteArticleById").await;
    missing.assert_status_ok();
    assert!(!missing.json::<bool>());

    let malformed = server
        .get("/api/Articles/DeleteArticleById")
        .add_query_param("id", "not-a-guid")
        .await;
    malformed.assert_status_ok();
    assert!(!malformed.json::<bool>());

    let malformed_path = server
        .get("/api/Articles/DeleteArticleById/not-a-guid")
        .await;
    malformed_path.assert_status_ok();
    assert!(!malformed_path.json::<bool>());

    let remaining: Vec<ArticlePreview> = server
        .get("/api/Articles/GetArticlesPreviews")
        .await
        .json();
    assert_eq!(remaining.len(), 3);
}

#[tokio::test]
async fn test_update_article_overwrites() {
    let (server, seed) = server();
    let target = seed.articles[0].id;

    let replacement = Article {
        id: target,
        name: "fresh name".into(),
        preview: "fresh preview".into(),
        description: "fresh description".into(),
        content: "fresh content".into(),
        categories: vec![seed.categories[1].id],
        authors: vec![seed.users[1].id],
        date: date::parse("2021-06-15 08:30:00").unwrap(),
        is_favorite: true,
        is_visible: false,
    };

    let updated: bool = server
        .post("/api/Articles/UpdateArticleById")
        .json(&replacement)
        .await
        .json();
    assert!(updated);

    let stored: Article = server
        .get("/api/Articles/GetArticleById")
        .add_query_param("id", target)
        .await
        .json();
    assert_eq!(stored, replacement);
}

#[tokio::test]
async fn test_update_unknown_article_is_false() {
    let (server, seed) = server();
    let mut stray = seed.articles[0].clone();
    stray.id = ArticleId::generate();

    let updated: bool = server
        .post("/api/Articles/UpdateArticleById")
        .json(&stray)
        .await
        .json();
    assert!(!updated);
}

#[tokio::test]
async fn test_update_rejects_bad_bodies() {
    let (server, seed) = server();

    let empty = server.post("/api/Articles/UpdateArticleById").await;
    empty.assert_status_ok();
    assert!(!empty.json::<bool>());

    let garbage: bool = server
        .post("/api/Articles/UpdateArticleById")
        .text("{ this is not json")
        .await
        .json();
    assert!(!garbage);

    let partial: bool = server
        .post("/api/Articles/UpdateArticleById")
        .json(&json!({ "Id": seed.articles[0].id, "Name": "half an article" }))
        .await
        .json();
    assert!(!partial);

    let untouched: Article = server
        .get("/api/Articles/GetArticleById")
        .add_query_param("id", seed.articles[0].id)
        .await
        .json();
    assert_eq!(untouched.name, "article1");
}

#[tokio::test]
async fn test_update_accepts_camel_case_body() {
    let (server, seed) = server();
    let target = &seed.articles[2];

    let updated: bool = server
        .post("/api/Articles/UpdateArticleById")
        .json(&json!({
            "id": target.id,
            "name": "camel name",
            "preview": target.preview,
            "description": target.description,
            "content": target.content,
            "categories": target.categories,
            "authors": target.authors,
            "date": "2020-03-04 05:06:07",
            "isFavorite": true,
            "isVisible": true
        }))
        .await
        .json();
    assert!(updated);

    let stored: Article = server
        .get("/api/Articles/GetArticleById")
        .add_query_param("id", target.id)
        .await
        .json();
    assert_eq!(stored.name, "camel name");
    assert!(stored.is_favorite);
}

#[tokio::test]
async fn test_create_new_article() {
    let (server, seed) = server();
    let author = seed.users[0].id;

    let response = server
        .post("/api/Articles/CreateNewArticle")
        .add_query_param("authorId", author)
        .await;
    response.assert_status_ok();
    let id: ArticleId = response.json();

    let created: Article = server
        .get("/api/Articles/GetArticleById")
        .add_query_param("id", id)
        .await
        .json();
    assert_eq!(created.authors, vec![author]);

    let listed: Vec<ArticlePreview> = server
        .get("/api/Articles/GetArticlesPreviews")
        .await
        .json();
    assert_eq!(listed.len(), 4);
}

#[tokio::test]
async fn test_create_for_unknown_author() {
    let (server, _) = server();
    let stranger = UserId::generate();

    let response = server
        .post("/api/Articles/CreateNewArticle")
        .add_query_param("authorId", stranger)
        .await;
    response.assert_status_ok();
    let id: ArticleId = response.json();

    let by_author: Vec<ArticlePreview> = server
        .get("/api/Articles/GetArticlesPreviewsByAuthor")
        .add_query_param("authorId", stranger)
        .await
        .json();
    assert_eq!(by_author.len(), 1);
    assert_eq!(by_author[0].id, id);
}

#[tokio::test]
async fn test_cors_is_open() {
    let (server, _) = server();

    let response = server
        .get("/api/Articles/GetUsers")
        .add_header(ORIGIN, HeaderValue::from_static("https://example.org"))
        .await;

    assert_eq!(response.header(ACCESS_CONTROL_ALLOW_ORIGIN), "*");
}
