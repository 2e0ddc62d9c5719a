use crate::{
    modules::catalog::{
        domain::{Category, Credits, Movie, MovieId, ProviderConfig, Review},
        infrastructure::{
            http_client::RateLimitClient,
            tmdb::mapper::{MovieMapper, TmdbMapper},
        },
        traits::MetadataSource,
    },
    shared::errors::{AppError, AppResult},
};
use async_trait::async_trait;

use super::models::*;

/// TMDB (The Movie Database) metadata client over the v3 REST API
pub struct TmdbClient {
    http_client: RateLimitClient,
    base_url: String,
    api_key: String,
    language: String,
    mapper: TmdbMapper,
}

impl TmdbClient {
    pub fn new(config: &ProviderConfig) -> AppResult<Self> {
        Self::with_client(RateLimitClient::for_tmdb(config)?, config)
    }

    /// Create client with custom HTTP client (for testing)
    pub fn with_client(http_client: RateLimitClient, config: &ProviderConfig) -> AppResult<Self> {
        if !config.has_credential() {
            return Err(AppError::ConfigError(
                "TMDB API key cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
            mapper: TmdbMapper::new(),
        })
    }

    /// Check if a request can be made immediately (for testing and monitoring)
    pub fn can_make_request_now(&self) -> bool {
        self.http_client.can_make_request_now()
    }

    /// Build URL with API key, language and additional query parameters
    fn build_url(&self, endpoint: &str, params: &[(&str, String)]) -> String {
        let mut url = format!(
            "{}{}?api_key={}&language={}",
            self.base_url,
            endpoint,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(&self.language)
        );
        for (key, value) in params {
            if *key != "api_key" {
                url.push_str(&format!("&{}={}", key, urlencoding::encode(value)));
            }
        }
        url
    }

    async fn get<T>(&self, endpoint: &str, params: &[(&str, String)]) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.build_url(endpoint, params);
        self.http_client.get(&url, endpoint).await
    }
}

#[async_trait]
impl MetadataSource for TmdbClient {
    async fn fetch_category(&self, category: Category, page: u32) -> AppResult<Vec<Movie>> {
        if page == 0 {
            return Err(AppError::InvalidInput(
                "Page numbers start at 1".to_string(),
            ));
        }

        log::info!("TMDB: Getting '{}' page {}", category, page);

        if category.returns_single() {
            let raw: TmdbMovie = self.get(category.endpoint(), &[]).await?;
            return Ok(vec![self.mapper.map_to_movie(raw)?]);
        }

        let response: TmdbPagedResponse<TmdbMovie> = self
            .get(category.endpoint(), &[("page", page.to_string())])
            .await?;

        let movies = self.mapper.map_to_movie_list(response.results)?;
        log::info!("TMDB: Found {} movies for '{}'", movies.len(), category);
        Ok(movies)
    }

    async fn fetch_movie(&self, id: MovieId) -> AppResult<Movie> {
        log::info!("TMDB: Getting movie details for ID '{}'", id);
        let raw: TmdbMovie = self.get(&format!("/movie/{}", id), &[]).await?;
        self.mapper.map_to_movie(raw)
    }

    async fn fetch_credits(&self, id: MovieId) -> AppResult<Credits> {
        log::info!("TMDB: Getting credits for movie ID '{}'", id);
        let raw: TmdbCredits = self.get(&format!("/movie/{}/credits", id), &[]).await?;
        let credits = self.mapper.map_credits(raw);
        log::debug!(
            "TMDB: {} cast, {} crew for movie ID '{}'",
            credits.cast.len(),
            credits.crew.len(),
            id
        );
        Ok(credits)
    }

    async fn fetch_reviews(&self, id: MovieId) -> AppResult<Vec<Review>> {
        log::info!("TMDB: Getting reviews for movie ID '{}'", id);
        let response: TmdbPagedResponse<TmdbReview> = self
            .get(&format!("/movie/{}/reviews", id), &[])
            .await?;
        Ok(self.mapper.map_reviews(response.results))
    }

    async fn fetch_similar(&self, id: MovieId) -> AppResult<Vec<Movie>> {
        log::info!("TMDB: Getting similar movies for ID '{}'", id);
        let response: TmdbPagedResponse<TmdbMovie> = self
            .get(&format!("/movie/{}/similar", id), &[])
            .await?;
        self.mapper.map_to_movie_list(response.results)
    }
}
