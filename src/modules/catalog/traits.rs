use async_trait::async_trait;

use crate::modules::catalog::domain::{Category, Credits, Movie, MovieId, Review};
use crate::shared::errors::AppResult;

/// First (and only) page the catalog ever requests.
pub const FIRST_PAGE: u32 = 1;

/// Read-only access to an upstream movie-metadata provider.
///
/// Implementations surface every failure to the caller; they never retry
/// and never turn an error into an empty list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// One page of a category list, in provider ranking order
    async fn fetch_category(&self, category: Category, page: u32) -> AppResult<Vec<Movie>>;

    async fn fetch_movie(&self, id: MovieId) -> AppResult<Movie>;

    async fn fetch_credits(&self, id: MovieId) -> AppResult<Credits>;

    async fn fetch_reviews(&self, id: MovieId) -> AppResult<Vec<Review>>;

    async fn fetch_similar(&self, id: MovieId) -> AppResult<Vec<Movie>>;
}
