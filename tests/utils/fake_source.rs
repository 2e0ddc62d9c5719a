/// In-memory `MetadataSource` with latency and failure injection
///
/// Records how many requests were started, how many ran to completion and the
/// highest number in flight at once, so tests can observe fan-out behaviour.
use async_trait::async_trait;
use marquee_lib::modules::catalog::{
    Category, Credits, MetadataSource, Movie, MovieId, Review,
};
use marquee_lib::shared::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct SourceStats {
    started: AtomicUsize,
    completed: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    calls: Mutex<Vec<String>>,
}

impl SourceStats {
    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

/// Decrements the in-flight count even when the request future is dropped.
struct InFlight<'a>(&'a SourceStats);

impl<'a> InFlight<'a> {
    fn enter(stats: &'a SourceStats, call: String) -> Self {
        stats.calls.lock().unwrap().push(call);
        stats.started.fetch_add(1, Ordering::SeqCst);
        let now = stats.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        stats.max_in_flight.fetch_max(now, Ordering::SeqCst);
        Self(stats)
    }

    fn complete(self) {
        self.0.completed.fetch_add(1, Ordering::SeqCst);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Default)]
struct DetailFixture {
    movie: Option<Movie>,
    credits: Credits,
    reviews: Vec<Review>,
    similar: Vec<Movie>,
}

#[derive(Debug, Default)]
pub struct FakeSource {
    lists: HashMap<Category, Vec<Movie>>,
    failures: HashMap<Category, AppError>,
    delays: HashMap<Category, Duration>,
    default_delay: Duration,
    detail: DetailFixture,
    detail_failures: HashMap<&'static str, AppError>,
    stats: Arc<SourceStats>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> Arc<SourceStats> {
        self.stats.clone()
    }

    pub fn with_list(mut self, category: Category, movies: Vec<Movie>) -> Self {
        self.lists.insert(category, movies);
        self
    }

    pub fn with_failure(mut self, category: Category, error: AppError) -> Self {
        self.failures.insert(category, error);
        self
    }

    pub fn with_delay(mut self, category: Category, delay: Duration) -> Self {
        self.delays.insert(category, delay);
        self
    }

    /// Latency for every request without a per-category delay.
    pub fn with_default_delay(mut self, delay: Duration) -> Self {
        self.default_delay = delay;
        self
    }

    pub fn with_detail(
        mut self,
        movie: Movie,
        credits: Credits,
        reviews: Vec<Review>,
        similar: Vec<Movie>,
    ) -> Self {
        self.detail = DetailFixture {
            movie: Some(movie),
            credits,
            reviews,
            similar,
        };
        self
    }

    /// `part` is one of "details", "credits", "reviews", "similar".
    pub fn with_detail_failure(mut self, part: &'static str, error: AppError) -> Self {
        self.detail_failures.insert(part, error);
        self
    }

    fn delay_for(&self, category: Option<Category>) -> Duration {
        category
            .and_then(|c| self.delays.get(&c).copied())
            .unwrap_or(self.default_delay)
    }

    async fn settle<T>(
        &self,
        call: String,
        delay: Duration,
        outcome: impl FnOnce() -> AppResult<T>,
    ) -> AppResult<T> {
        let guard = InFlight::enter(&self.stats, call);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let result = outcome();
        guard.complete();
        result
    }

    fn detail_part<T: Clone>(&self, part: &'static str, value: &T) -> AppResult<T> {
        match self.detail_failures.get(part) {
            Some(error) => Err(error.clone()),
            None => Ok(value.clone()),
        }
    }
}

#[async_trait]
impl MetadataSource for FakeSource {
    async fn fetch_category(&self, category: Category, page: u32) -> AppResult<Vec<Movie>> {
        self.settle(
            format!("category:{}:{}", category.key(), page),
            self.delay_for(Some(category)),
            || match self.failures.get(&category) {
                Some(error) => Err(error.clone()),
                None => Ok(self.lists.get(&category).cloned().unwrap_or_default()),
            },
        )
        .await
    }

    async fn fetch_movie(&self, id: MovieId) -> AppResult<Movie> {
        self.settle(format!("movie:{}", id), self.default_delay, || {
            let movie = self
                .detail
                .movie
                .clone()
                .ok_or_else(|| AppError::ProviderError {
                    status: 404,
                    message: format!("movie {} not found", id),
                })?;
            self.detail_part("details", &movie)
        })
        .await
    }

    async fn fetch_credits(&self, id: MovieId) -> AppResult<Credits> {
        self.settle(format!("credits:{}", id), self.default_delay, || {
            self.detail_part("credits", &self.detail.credits)
        })
        .await
    }

    async fn fetch_reviews(&self, id: MovieId) -> AppResult<Vec<Review>> {
        self.settle(format!("reviews:{}", id), self.default_delay, || {
            self.detail_part("reviews", &self.detail.reviews)
        })
        .await
    }

    async fn fetch_similar(&self, id: MovieId) -> AppResult<Vec<Movie>> {
        self.settle(format!("similar:{}", id), self.default_delay, || {
            self.detail_part("similar", &self.detail.similar)
        })
        .await
    }
}
