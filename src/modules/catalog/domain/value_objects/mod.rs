pub mod category;
pub mod image;
pub mod movie_id;
pub mod rating;

pub use category::Category;
pub use image::{ImageResolver, ImageSize, ImageSource};
pub use movie_id::MovieId;
pub use rating::Rating;
