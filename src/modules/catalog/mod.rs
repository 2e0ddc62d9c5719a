pub mod domain;
pub mod infrastructure;
pub mod traits;

// Re-exports for easy external access
pub use domain::{
    CastMember, Category, CategorySection, Credits, CrewMember, Genre, ImageResolver, ImageSize,
    ImageSource, Movie, MovieId, ProviderConfig, Rating, Review,
};
pub use infrastructure::TmdbClient;
pub use traits::{MetadataSource, FIRST_PAGE};
