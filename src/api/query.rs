use axum::{
    extract::{path::ErrorKind, rejection::PathRejection, FromRequestParts, Path, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::entities::{CategoryId, UserId};
use crate::paging::{PageSizeValidator, DEFAULT_PAGE_SIZE};

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// `?page=&pageSize=`, defaulting to the first page of ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(default)]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

impl PageQuery {
    pub fn clamped(self, validator: &PageSizeValidator) -> Self {
        Self {
            page: self.page,
            page_size: i64::try_from(validator.clamp(self.page_size)).unwrap_or(i64::MAX),
        }
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuery {
    pub category_id: CategoryId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorQuery {
    pub author_id: UserId,
}

#[derive(Debug, Deserialize)]
struct IdQuery<T> {
    id: T,
}

/// Entity id taken from a trailing `/{id}` path segment or, on routes without one, `?id=`.
#[derive(Debug, Clone, Copy)]
pub struct RequestedId<T>(pub T);

impl<S, T> FromRequestParts<S> for RequestedId<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(id)) => return Ok(Self(id)),
            Err(PathRejection::MissingPathParams(_)) => {}
            Err(PathRejection::FailedToDeserializePathParams(e))
                if matches!(e.kind(), ErrorKind::WrongNumberOfParameters { got: 0, .. }) => {}
            Err(rejection) => return Err(rejection.into_response()),
        }

        let Query(IdQuery { id }) = Query::<IdQuery<T>>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        Ok(Self(id))
    }
}
