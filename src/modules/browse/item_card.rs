use serde::Serialize;

use super::config::CardStyle;
use crate::modules::catalog::{ImageResolver, ImageSize, ImageSource, Movie, MovieId};

/// Hover affordances on a feature card. Rendered only; no behaviour behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardAction {
    Play,
    AddToList,
    Like,
    MoreInfo,
}

pub const FEATURE_ACTIONS: [CardAction; 4] = [
    CardAction::Play,
    CardAction::AddToList,
    CardAction::Like,
    CardAction::MoreInfo,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSummary {
    pub id: MovieId,
    pub title: String,
    pub href: String,
    pub image: ImageSource,
    pub style: CardStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpandedCard {
    #[serde(flatten)]
    pub summary: CardSummary,
    pub release_year: Option<i32>,
    /// One decimal place. Shown for a zero rating, absent when unrated.
    pub rating: Option<String>,
    pub match_percent: Option<u8>,
    /// Thousands-separated, feature cards only.
    pub vote_count: Option<String>,
    pub actions: Vec<CardAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CardView {
    Collapsed(CardSummary),
    Expanded(ExpandedCard),
}

impl CardView {
    pub fn summary(&self) -> &CardSummary {
        match self {
            CardView::Collapsed(summary) => summary,
            CardView::Expanded(card) => &card.summary,
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, CardView::Expanded(_))
    }
}

/// Feature card for `movie`. Pure: same inputs, same view.
pub fn render_card(movie: &Movie, is_active: bool, images: &ImageResolver) -> CardView {
    render_styled_card(movie, is_active, CardStyle::Feature, images)
}

pub fn render_styled_card(
    movie: &Movie,
    is_active: bool,
    style: CardStyle,
    images: &ImageResolver,
) -> CardView {
    let image_path = match style {
        CardStyle::Feature => movie.card_image_path(),
        CardStyle::Poster => movie.poster_path.as_deref(),
    };

    let summary = CardSummary {
        id: movie.id,
        title: movie.title.clone(),
        href: movie.href(),
        image: images.poster(image_path, ImageSize::W500),
        style,
    };

    if !is_active {
        return CardView::Collapsed(summary);
    }

    let rating = movie.rating.map(|rating| rating.to_string());
    let expanded = match style {
        CardStyle::Feature => ExpandedCard {
            summary,
            release_year: movie.release_year(),
            rating,
            match_percent: movie.rating.map(|rating| rating.match_percent()),
            vote_count: Some(format_thousands(movie.vote_count)),
            actions: FEATURE_ACTIONS.to_vec(),
        },
        CardStyle::Poster => ExpandedCard {
            summary,
            release_year: movie.release_year(),
            rating,
            match_percent: None,
            vote_count: None,
            actions: Vec::new(),
        },
    };
    CardView::Expanded(expanded)
}

/// `1234567` → `"1,234,567"`.
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
