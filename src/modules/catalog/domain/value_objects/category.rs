use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// The fixed set of provider list endpoints a section can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Popular,
    TopRated,
    Upcoming,
    Latest,
    NowPlaying,
    TrendingWeek,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Popular,
        Category::TopRated,
        Category::Upcoming,
        Category::Latest,
        Category::NowPlaying,
        Category::TrendingWeek,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Popular => "popular",
            Category::TopRated => "top_rated",
            Category::Upcoming => "upcoming",
            Category::Latest => "latest",
            Category::NowPlaying => "now_playing",
            Category::TrendingWeek => "trending_week",
        }
    }

    /// Path relative to the provider base url.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Category::Popular => "/movie/popular",
            Category::TopRated => "/movie/top_rated",
            Category::Upcoming => "/movie/upcoming",
            Category::Latest => "/movie/latest",
            Category::NowPlaying => "/movie/now_playing",
            Category::TrendingWeek => "/trending/movie/week",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Popular => "Popular Movies",
            Category::TopRated => "Top Rated Movies",
            Category::Upcoming => "Upcoming Bangers",
            Category::Latest => "Latest",
            Category::NowPlaying => "Now Playing",
            Category::TrendingWeek => "Trending Now",
        }
    }

    /// `latest` answers with a single movie object instead of a paged list.
    pub fn returns_single(&self) -> bool {
        matches!(self, Category::Latest)
    }

    pub fn is_paged(&self) -> bool {
        !self.returns_single()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "popular" => Ok(Category::Popular),
            "top_rated" => Ok(Category::TopRated),
            "upcoming" => Ok(Category::Upcoming),
            "latest" => Ok(Category::Latest),
            "now_playing" => Ok(Category::NowPlaying),
            "trending_week" | "trending" => Ok(Category::TrendingWeek),
            other => Err(AppError::InvalidInput(format!(
                "Unknown category key: '{}'",
                other
            ))),
        }
    }
}
