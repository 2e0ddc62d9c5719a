use serde::Serialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::policy::{run_bounded, AggregationConfig};
use crate::modules::catalog::{CastMember, Credits, MetadataSource, Movie, MovieId, Review};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::TimedOperation;

pub const DIRECTOR_JOB: &str = "Director";
pub const COMPOSER_JOBS: [&str; 2] = ["Original Music Composer", "Music"];

/// The four raw responses that make up one detail page.
#[derive(Debug, Clone)]
pub struct DetailBundle {
    pub details: Movie,
    pub credits: Credits,
    pub reviews: Vec<Review>,
    pub similar: Vec<Movie>,
}

/// Issue the four detail requests for `id` concurrently and wait for all.
///
/// The first failure in (details, credits, reviews, similar) order is
/// returned; every failure is logged.
pub async fn fetch_detail_bundle(source: &dyn MetadataSource, id: MovieId) -> AppResult<DetailBundle> {
    let (details, credits, reviews, similar) = tokio::join!(
        source.fetch_movie(id),
        source.fetch_credits(id),
        source.fetch_reviews(id),
        source.fetch_similar(id),
    );

    let parts = [
        ("details", details.as_ref().err()),
        ("credits", credits.as_ref().err()),
        ("reviews", reviews.as_ref().err()),
        ("similar", similar.as_ref().err()),
    ];
    for (part, error) in parts {
        if let Some(error) = error {
            warn!(movie_id = id.value(), part, error = %error, "detail fetch failed");
        }
    }

    Ok(DetailBundle {
        details: details?,
        credits: credits?,
        reviews: reviews?,
        similar: similar?,
    })
}

/// Merged detail view model. Lists are unbounded; truncation happens at render time.
#[derive(Debug, Clone, Serialize)]
pub struct MovieDetailView {
    pub movie: Movie,
    pub director: Option<String>,
    pub composer: Option<String>,
    pub cast: Vec<CastMember>,
    pub reviews: Vec<Review>,
    pub similar: Vec<Movie>,
}

impl MovieDetailView {
    pub fn merge(bundle: DetailBundle) -> Self {
        let director = bundle
            .credits
            .first_with_job(&[DIRECTOR_JOB])
            .map(|member| member.name.clone());
        let composer = bundle
            .credits
            .first_with_job(&COMPOSER_JOBS)
            .map(|member| member.name.clone());

        Self {
            movie: bundle.details,
            director,
            composer,
            cast: bundle.credits.cast,
            reviews: bundle.reviews,
            similar: bundle.similar,
        }
    }
}

pub struct DetailAggregator {
    source: Arc<dyn MetadataSource>,
    config: AggregationConfig,
}

impl DetailAggregator {
    pub fn new(source: Arc<dyn MetadataSource>, config: AggregationConfig) -> Self {
        Self { source, config }
    }

    /// All-or-nothing regardless of the configured failure policy.
    pub async fn aggregate(&self, id: MovieId, cancel: &CancellationToken) -> AppResult<MovieDetailView> {
        let scope = format!("movie {}", id);
        let timer = TimedOperation::new(&format!("detail aggregation '{}'", scope));

        let bundle = run_bounded(
            fetch_detail_bundle(self.source.as_ref(), id),
            &scope,
            cancel,
            self.config.deadline,
        )
        .await?
        .map_err(|error| AppError::AggregationFailed {
            scope: scope.clone(),
            source: Box::new(error),
        })?;

        let view = MovieDetailView::merge(bundle);
        info!(
            movie_id = id.value(),
            cast = view.cast.len(),
            reviews = view.reviews.len(),
            similar = view.similar.len(),
            "detail aggregated"
        );
        timer.finish();
        Ok(view)
    }
}
