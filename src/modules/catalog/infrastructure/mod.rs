pub mod http_client;
pub mod tmdb;

pub use http_client::RateLimitClient;
pub use tmdb::TmdbClient;
