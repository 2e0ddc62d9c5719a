pub mod client;
pub mod mapper;
pub mod models;

pub use client::TmdbClient;
pub use mapper::{MovieMapper, TmdbMapper};
