use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::modules::aggregation::SectionPlan;
use crate::modules::catalog::{Category, MovieId};
use crate::shared::errors::AppError;

/// A navigable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum Route {
    Landing,
    Category(Category),
    Movie(MovieId),
}

impl Route {
    /// Section plan for list pages; `None` for the detail page.
    pub fn plan(&self) -> Option<SectionPlan> {
        match self {
            Route::Landing => Some(SectionPlan::landing()),
            Route::Category(category) => Some(SectionPlan::single(*category)),
            Route::Movie(_) => None,
        }
    }

    pub fn title(&self) -> Option<&'static str> {
        match self {
            Route::Category(category) => Some(category.display_name()),
            Route::Landing | Route::Movie(_) => None,
        }
    }

    /// Fallback shown when the page could not be loaded.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Route::Landing => "Failed to load movie sections.",
            Route::Category(Category::Popular) => "Failed to load popular movies.",
            Route::Category(Category::TopRated) => "Failed to load top rated movies.",
            Route::Category(Category::Upcoming) => "Failed to load upcoming movies.",
            Route::Category(Category::TrendingWeek) => "Failed to load trending movies.",
            Route::Category(Category::NowPlaying) | Route::Category(Category::Latest) => {
                "Failed to load latest movies."
            }
            Route::Movie(_) => "Failed to load movie details.",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Route::Landing => write!(f, "/"),
            Route::Category(Category::Popular) => write!(f, "/popular"),
            Route::Category(Category::TopRated) => write!(f, "/top-rated"),
            Route::Category(Category::Upcoming) => write!(f, "/upcoming"),
            Route::Category(Category::TrendingWeek) => write!(f, "/trending"),
            // The "latest" page lists what is now playing.
            Route::Category(Category::NowPlaying) => write!(f, "/latest"),
            Route::Category(Category::Latest) => write!(f, "/category/latest"),
            Route::Movie(id) => write!(f, "/movie/{}", id),
        }
    }
}

impl FromStr for Route {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim().split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|seg| !seg.is_empty()).collect();

        match segments.as_slice() {
            [] => Ok(Route::Landing),
            ["popular"] => Ok(Route::Category(Category::Popular)),
            ["top-rated"] => Ok(Route::Category(Category::TopRated)),
            ["upcoming"] => Ok(Route::Category(Category::Upcoming)),
            ["trending"] => Ok(Route::Category(Category::TrendingWeek)),
            ["latest"] => Ok(Route::Category(Category::NowPlaying)),
            ["category", key] => Ok(Route::Category(key.parse()?)),
            ["movie", id] => Ok(Route::Movie(id.parse()?)),
            _ => Err(AppError::InvalidInput(format!("Unknown route: '{}'", s))),
        }
    }
}
