use super::models::{TmdbCastMember, TmdbCredits, TmdbCrewMember, TmdbGenre, TmdbMovie, TmdbReview};
use crate::modules::catalog::domain::{
    CastMember, Credits, CrewMember, Genre, Movie, MovieId, Rating, Review,
};
use crate::shared::errors::{AppError, AppResult};
use chrono::NaiveDate;

const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Main mapper trait for converting provider-specific records to domain movies
pub trait MovieMapper<T> {
    /// Map provider data to a domain Movie
    fn map_to_movie(&self, source: T) -> AppResult<Movie>;

    /// Map a list of provider data, failing on the first bad record
    fn map_to_movie_list(&self, sources: Vec<T>) -> AppResult<Vec<Movie>> {
        sources
            .into_iter()
            .map(|source| self.map_to_movie(source))
            .collect()
    }
}

/// TMDB (The Movie Database) specific mapper implementation
#[derive(Debug, Clone, Default)]
pub struct TmdbMapper;

impl TmdbMapper {
    pub fn new() -> Self {
        Self
    }

    /// Parse TMDB's `YYYY-MM-DD`. Empty means unknown; a malformed date is
    /// logged and treated as unknown rather than failing the whole list.
    fn parse_release_date(id: u64, raw: Option<&str>) -> Option<NaiveDate> {
        let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
        match NaiveDate::parse_from_str(raw, RELEASE_DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(e) => {
                log::warn!("TMDB: movie {} has malformed release_date '{}': {}", id, raw, e);
                None
            }
        }
    }

    fn map_genres(genres: Option<Vec<TmdbGenre>>, genre_ids: Option<Vec<u32>>) -> Vec<Genre> {
        match (genres, genre_ids) {
            (Some(genres), _) => genres
                .into_iter()
                .map(|genre| Genre {
                    id: genre.id,
                    name: genre.name,
                })
                .collect(),
            (None, Some(ids)) => ids.into_iter().map(|id| Genre { id, name: None }).collect(),
            (None, None) => Vec::new(),
        }
    }

    fn non_empty(value: Option<String>) -> Option<String> {
        value.filter(|s| !s.trim().is_empty())
    }

    pub fn map_credits(&self, source: TmdbCredits) -> Credits {
        Credits {
            cast: source.cast.into_iter().map(Self::map_cast_member).collect(),
            crew: source.crew.into_iter().map(Self::map_crew_member).collect(),
        }
    }

    fn map_cast_member(member: TmdbCastMember) -> CastMember {
        CastMember {
            id: member.id,
            name: member.name,
            character: member.character.unwrap_or_default(),
            profile_path: Self::non_empty(member.profile_path),
        }
    }

    fn map_crew_member(member: TmdbCrewMember) -> CrewMember {
        CrewMember {
            id: member.id,
            name: member.name,
            job: member.job.unwrap_or_default(),
            department: member.department,
        }
    }

    pub fn map_review(&self, source: TmdbReview) -> Review {
        Review {
            id: source.id,
            author: source.author,
            content: source.content,
            url: source.url,
        }
    }

    pub fn map_reviews(&self, sources: Vec<TmdbReview>) -> Vec<Review> {
        sources
            .into_iter()
            .map(|review| self.map_review(review))
            .collect()
    }

    /// Back to the wire shape. Used to write provider-shaped fixtures.
    pub fn to_wire(&self, movie: &Movie) -> TmdbMovie {
        let named = movie.genres.iter().any(|genre| genre.name.is_some());
        TmdbMovie {
            id: movie.id.value(),
            title: Some(movie.title.clone()),
            original_title: None,
            original_language: Some(movie.original_language.clone()),
            overview: Some(movie.overview.clone()),
            poster_path: movie.poster_path.clone(),
            backdrop_path: movie.backdrop_path.clone(),
            release_date: movie
                .release_date
                .map(|date| date.format(RELEASE_DATE_FORMAT).to_string()),
            vote_average: movie.rating.map(|rating| rating.value()),
            vote_count: Some(movie.vote_count),
            genre_ids: (!named).then(|| movie.genres.iter().map(|genre| genre.id).collect()),
            genres: named.then(|| {
                movie
                    .genres
                    .iter()
                    .map(|genre| TmdbGenre {
                        id: genre.id,
                        name: genre.name.clone(),
                    })
                    .collect()
            }),
        }
    }
}

impl MovieMapper<TmdbMovie> for TmdbMapper {
    fn map_to_movie(&self, source: TmdbMovie) -> AppResult<Movie> {
        let id = MovieId::new(source.id)
            .map_err(|_| AppError::DecodeError("TMDB movie with id 0".to_string()))?;

        let title = Self::non_empty(source.title)
            .or_else(|| Self::non_empty(source.original_title))
            .ok_or_else(|| AppError::DecodeError(format!("TMDB movie {} has no title", id)))?;

        let rating = source.vote_average.map(Rating::new).transpose()?;
        let release_date = Self::parse_release_date(source.id, source.release_date.as_deref());

        Ok(Movie {
            id,
            title,
            overview: source.overview.unwrap_or_default(),
            poster_path: Self::non_empty(source.poster_path),
            backdrop_path: Self::non_empty(source.backdrop_path),
            release_date,
            rating,
            vote_count: source.vote_count.unwrap_or(0),
            genres: Self::map_genres(source.genres, source.genre_ids),
            original_language: source.original_language.unwrap_or_default(),
        })
    }
}
