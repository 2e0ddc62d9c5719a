use serde::{Deserialize, Serialize};

pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const POSTER_PLACEHOLDER: &str = "/placeholder-poster.png";
pub const PROFILE_PLACEHOLDER: &str = "/placeholder-profile.png";

/// Rendition widths the image CDN serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    W185,
    W342,
    W500,
    Original,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W185 => "w185",
            ImageSize::W342 => "w342",
            ImageSize::W500 => "w500",
            ImageSize::Original => "original",
        }
    }
}

/// Where a card or hero should load its picture from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "src", rename_all = "snake_case")]
pub enum ImageSource {
    Remote(String),
    Placeholder(String),
}

impl ImageSource {
    pub fn src(&self) -> &str {
        match self {
            ImageSource::Remote(url) | ImageSource::Placeholder(url) => url,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImageSource::Placeholder(_))
    }
}

/// Maps provider path fragments to CDN urls. Pure: never probes the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    base_url: String,
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE_URL)
    }
}

impl ImageResolver {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build full image URL from file path
    pub fn build_image_url(&self, file_path: &str, size: ImageSize) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            size.as_str(),
            file_path.trim_start_matches('/')
        )
    }

    pub fn resolve(&self, path: Option<&str>, size: ImageSize, placeholder: &str) -> ImageSource {
        match path.map(str::trim).filter(|p| !p.is_empty()) {
            Some(path) => ImageSource::Remote(self.build_image_url(path, size)),
            None => ImageSource::Placeholder(placeholder.to_string()),
        }
    }

    pub fn poster(&self, path: Option<&str>, size: ImageSize) -> ImageSource {
        self.resolve(path, size, POSTER_PLACEHOLDER)
    }

    pub fn profile(&self, path: Option<&str>) -> ImageSource {
        self.resolve(path, ImageSize::W185, PROFILE_PLACEHOLDER)
    }
}
