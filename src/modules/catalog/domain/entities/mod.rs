pub mod category_section;
pub mod credits;
pub mod movie;
pub mod provider_config;
pub mod review;

pub use category_section::CategorySection;
pub use credits::{CastMember, Credits, CrewMember};
pub use movie::{Genre, Movie};
pub use provider_config::ProviderConfig;
pub use review::Review;
