/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::NaiveDate;
use marquee_lib::modules::catalog::{
    CastMember, Credits, CrewMember, Genre, Movie, MovieId, Rating, Review,
};

pub struct MovieFactory {
    id: u64,
    title: String,
    overview: String,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    release_date: Option<NaiveDate>,
    rating: Option<f64>,
    vote_count: u32,
    genres: Vec<Genre>,
    original_language: String,
}

impl Default for MovieFactory {
    fn default() -> Self {
        Self {
            id: 1,
            title: "Test Movie".to_string(),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: None,
            rating: None,
            vote_count: 0,
            genres: Vec::new(),
            original_language: "en".to_string(),
        }
    }
}

impl MovieFactory {
    pub fn new(id: u64) -> Self {
        Self::default()
            .with_id(id)
            .with_title(&format!("Movie {}", id))
    }

    pub fn complete(id: u64) -> Self {
        Self::new(id)
            .with_overview("A complete test movie with full data")
            .with_poster(&format!("/poster-{}.jpg", id))
            .with_backdrop(&format!("/backdrop-{}.jpg", id))
            .with_release_date(2019, 5, 30)
            .with_rating(8.5)
            .with_vote_count(17250)
            .with_genres(&[(18, "Drama"), (53, "Thriller")])
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_overview(mut self, overview: &str) -> Self {
        self.overview = overview.to_string();
        self
    }

    pub fn with_poster(mut self, path: &str) -> Self {
        self.poster_path = Some(path.to_string());
        self
    }

    pub fn with_backdrop(mut self, path: &str) -> Self {
        self.backdrop_path = Some(path.to_string());
        self
    }

    pub fn with_release_date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.release_date = NaiveDate::from_ymd_opt(year, month, day);
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_vote_count(mut self, vote_count: u32) -> Self {
        self.vote_count = vote_count;
        self
    }

    pub fn with_genres(mut self, genres: &[(u32, &str)]) -> Self {
        self.genres = genres
            .iter()
            .map(|(id, name)| Genre {
                id: *id,
                name: Some(name.to_string()),
            })
            .collect();
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.original_language = language.to_string();
        self
    }

    pub fn build(self) -> Movie {
        Movie {
            id: MovieId::new(self.id).expect("factory ids are positive"),
            title: self.title,
            overview: self.overview,
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            release_date: self.release_date,
            rating: self.rating.map(|r| Rating::new(r).expect("factory rating in range")),
            vote_count: self.vote_count,
            genres: self.genres,
            original_language: self.original_language,
        }
    }
}

/// `count` movies with ids `first..first + count`.
pub fn movies(first: u64, count: u64) -> Vec<Movie> {
    (first..first + count)
        .map(|id| MovieFactory::complete(id).build())
        .collect()
}

pub fn cast_member(id: u64, name: &str, character: &str) -> CastMember {
    CastMember {
        id,
        name: name.to_string(),
        character: character.to_string(),
        profile_path: Some(format!("/profile-{}.jpg", id)),
    }
}

pub fn crew_member(id: u64, name: &str, job: &str) -> CrewMember {
    CrewMember {
        id,
        name: name.to_string(),
        job: job.to_string(),
        department: None,
    }
}

pub fn credits(cast: Vec<CastMember>, crew: Vec<CrewMember>) -> Credits {
    Credits { cast, crew }
}

pub fn review(n: usize) -> Review {
    Review {
        id: format!("5b{:06}", n),
        author: format!("reviewer{}", n),
        content: "Worth the ticket.".to_string(),
        url: format!("https://www.themoviedb.org/review/5b{:06}", n),
    }
}
