use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::movie::Movie;
use crate::modules::catalog::domain::value_objects::Category;

/// A labelled, provider-ordered list of movies.
///
/// Movie ids are unique within a section: if the provider repeats an id the
/// later entry is dropped, so the first (higher-ranked) position wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySection {
    pub label: String,
    pub category: Category,
    movies: Vec<Movie>,
}

impl CategorySection {
    pub fn new(label: impl Into<String>, category: Category, movies: Vec<Movie>) -> Self {
        let label = label.into();
        let received = movies.len();
        let mut seen = HashSet::with_capacity(received);
        let movies: Vec<Movie> = movies
            .into_iter()
            .filter(|movie| seen.insert(movie.id))
            .collect();

        if movies.len() < received {
            log::debug!(
                "Section '{}' dropped {} duplicate movie ids",
                label,
                received - movies.len()
            );
        }

        Self {
            label,
            category,
            movies,
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn into_movies(self) -> Vec<Movie> {
        self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
