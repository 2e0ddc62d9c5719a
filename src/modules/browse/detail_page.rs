use serde::Serialize;

use super::config::DisplayLimits;
use crate::modules::aggregation::MovieDetailView;
use crate::modules::catalog::{
    CastMember, ImageResolver, ImageSize, ImageSource, Movie, MovieId, Review,
};

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_REVIEWS: &str = "No reviews yet.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroView {
    pub title: String,
    pub release_year: Option<i32>,
    /// Uppercased language code, e.g. `EN`.
    pub language: String,
    pub rating: Option<String>,
    pub backdrop: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CastCard {
    pub id: u64,
    pub name: String,
    /// "as {character}"
    pub role: String,
    pub image: ImageSource,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarCard {
    pub id: MovieId,
    pub title: String,
    pub href: String,
    pub release_year: Option<i32>,
    pub rating: Option<String>,
    pub image: ImageSource,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewCard {
    pub id: String,
    pub author: String,
    pub content: String,
    pub read_more_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewsView {
    pub shown: Vec<ReviewCard>,
    pub show_more: bool,
    pub empty_message: Option<String>,
}

/// Everything the detail surface draws for one movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailPageView {
    pub id: MovieId,
    pub hero: HeroView,
    pub overview: String,
    pub director: String,
    pub composer: String,
    pub genres: String,
    pub poster: ImageSource,
    pub cast: Vec<CastCard>,
    pub similar: Vec<SimilarCard>,
    pub reviews: ReviewsView,
}

impl DetailPageView {
    pub fn render(view: &MovieDetailView, limits: &DisplayLimits, images: &ImageResolver) -> Self {
        let movie = &view.movie;

        Self {
            id: movie.id,
            hero: HeroView {
                title: movie.title.clone(),
                release_year: movie.release_year(),
                language: movie.original_language.to_uppercase(),
                rating: movie.rating.map(|rating| rating.to_string()),
                backdrop: movie
                    .backdrop_path
                    .as_deref()
                    .map(|path| images.build_image_url(path, ImageSize::Original)),
            },
            overview: movie.overview.clone(),
            director: or_not_available(view.director.as_deref()),
            composer: or_not_available(view.composer.as_deref()),
            genres: movie.genre_names().join(", "),
            poster: images.poster(movie.poster_path.as_deref(), ImageSize::W500),
            cast: view
                .cast
                .iter()
                .take(limits.cast)
                .map(|member| cast_card(member, images))
                .collect(),
            similar: view
                .similar
                .iter()
                .take(limits.similar)
                .map(|movie| similar_card(movie, images))
                .collect(),
            reviews: reviews_view(&view.reviews, limits.reviews),
        }
    }
}

fn or_not_available(name: Option<&str>) -> String {
    name.unwrap_or(NOT_AVAILABLE).to_string()
}

fn cast_card(member: &CastMember, images: &ImageResolver) -> CastCard {
    CastCard {
        id: member.id,
        name: member.name.clone(),
        role: format!("as {}", member.character),
        image: images.profile(member.profile_path.as_deref()),
    }
}

fn similar_card(movie: &Movie, images: &ImageResolver) -> SimilarCard {
    SimilarCard {
        id: movie.id,
        title: movie.title.clone(),
        href: movie.href(),
        release_year: movie.release_year(),
        rating: movie.rating.map(|rating| rating.to_string()),
        image: images.poster(movie.poster_path.as_deref(), ImageSize::W342),
    }
}

fn reviews_view(reviews: &[Review], limit: usize) -> ReviewsView {
    ReviewsView {
        shown: reviews
            .iter()
            .take(limit)
            .map(|review| ReviewCard {
                id: review.id.clone(),
                author: review.author.clone(),
                content: review.content.clone(),
                read_more_url: review.url.clone(),
            })
            .collect(),
        show_more: reviews.len() > limit,
        empty_message: reviews.is_empty().then(|| NO_REVIEWS.to_string()),
    }
}
