use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::value_objects::{MovieId, Rating};

/// Genre reference. List endpoints only carry ids; detail carries names too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: Option<String>,
}

/// A movie as normalized from any provider list or detail response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<NaiveDate>,
    /// `None` when the provider sent no rating; distinct from `Some(0.0)`.
    pub rating: Option<Rating>,
    pub vote_count: u32,
    pub genres: Vec<Genre>,
    pub original_language: String,
}

impl Movie {
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.map(|date| date.year())
    }

    /// Backdrop first, poster as fallback; cards are landscape.
    pub fn card_image_path(&self) -> Option<&str> {
        self.backdrop_path
            .as_deref()
            .or(self.poster_path.as_deref())
    }

    pub fn genre_names(&self) -> Vec<&str> {
        self.genres
            .iter()
            .filter_map(|genre| genre.name.as_deref())
            .collect()
    }

    pub fn href(&self) -> String {
        format!("/movie/{}", self.id)
    }
}

#[cfg(test)]
pub(crate) fn sample_movie(id: u64, title: &str) -> Movie {
    Movie {
        id: MovieId::new(id).expect("sample ids are positive"),
        title: title.to_string(),
        overview: String::new(),
        poster_path: Some(format!("/poster-{}.jpg", id)),
        backdrop_path: None,
        release_date: NaiveDate::from_ymd_opt(2020, 1, 1),
        rating: Some(Rating::new(7.5).expect("in range")),
        vote_count: 1200,
        genres: Vec::new(),
        original_language: "en".to_string(),
    }
}
