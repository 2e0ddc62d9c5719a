use serde::{Deserialize, Serialize};

use super::config::ListConfig;
use super::hover::HoverState;
use super::item_card::{render_styled_card, CardView};
use super::scroll::{LayoutMode, ScrollDirection, ScrollState};
use crate::modules::catalog::{Category, CategorySection, ImageResolver, Movie, MovieId};

/// Input from the host for one list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListEvent {
    PointerEnter { id: MovieId },
    PointerLeave { id: MovieId },
    SectionEnter,
    SectionLeave,
    /// Step the carousel. Viewport-relative steps need a prior `Resize`;
    /// until one arrives the step is 0 px and the event changes nothing.
    Scroll { direction: ScrollDirection },
    ScrollReported { offset: f64 },
    Resize { viewport_width: f64, content_width: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView {
    pub label: String,
    pub category: Category,
    pub layout: LayoutMode,
    pub offset: f64,
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
    /// Arrows are drawn only while the section is hovered.
    pub arrows_visible: bool,
    pub explore_hint: bool,
    pub active: Option<MovieId>,
    pub cards: Vec<CardView>,
}

/// Interactive state for one horizontal list.
///
/// Owns the items it was built with and never reorders or refetches them;
/// events only move the scroll offset and the hover selection.
#[derive(Debug, Clone)]
pub struct ListRenderer {
    label: String,
    category: Category,
    movies: Vec<Movie>,
    config: ListConfig,
    images: ImageResolver,
    layout: LayoutMode,
    scroll: ScrollState,
    hover: HoverState,
    section_hovered: bool,
}

impl ListRenderer {
    pub fn new(section: CategorySection, config: ListConfig, images: ImageResolver) -> Self {
        let label = section.label.clone();
        let category = section.category;
        let movies = section.into_movies();
        let layout = LayoutMode::for_count(movies.len(), config.carousel_threshold);
        log::debug!(
            "List '{}': {} items, {:?} layout",
            label,
            movies.len(),
            layout
        );

        Self {
            label,
            category,
            movies,
            config,
            images,
            layout,
            scroll: ScrollState::default(),
            hover: HoverState::default(),
            section_hovered: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn active(&self) -> Option<MovieId> {
        self.hover.active()
    }

    fn contains(&self, id: MovieId) -> bool {
        self.movies.iter().any(|movie| movie.id == id)
    }

    /// Apply one event. Returns whether anything visible changed.
    pub fn handle(&mut self, event: ListEvent) -> bool {
        let before = (self.hover, self.scroll, self.section_hovered);

        match event {
            ListEvent::PointerEnter { id } if self.contains(id) => self.hover.activate(id),
            ListEvent::PointerLeave { id } if self.contains(id) => self.hover.clear(id),
            ListEvent::PointerEnter { id } | ListEvent::PointerLeave { id } => {
                log::debug!("List '{}': ignoring pointer event for unknown id {}", self.label, id);
            }
            ListEvent::SectionEnter => self.section_hovered = true,
            ListEvent::SectionLeave => self.section_hovered = false,
            ListEvent::Scroll { direction } => {
                if self.layout == LayoutMode::Carousel {
                    if self.config.scroll_step.delta(self.scroll.viewport_width) == 0.0 {
                        log::debug!(
                            "List '{}': scroll ignored, viewport width unknown (send resize first)",
                            self.label
                        );
                    }
                    self.scroll.scroll(direction, self.config.scroll_step);
                }
            }
            ListEvent::ScrollReported { offset } => {
                if self.layout == LayoutMode::Carousel {
                    self.scroll.report(offset);
                }
            }
            ListEvent::Resize {
                viewport_width,
                content_width,
            } => self.scroll.resize(viewport_width, content_width),
        }

        before != (self.hover, self.scroll, self.section_hovered)
    }

    pub fn render(&self) -> ListView {
        let carousel = self.layout == LayoutMode::Carousel;
        let epsilon = self.config.scroll_epsilon;

        ListView {
            label: self.label.clone(),
            category: self.category,
            layout: self.layout,
            offset: self.scroll.offset,
            can_scroll_left: carousel && self.scroll.can_scroll_left(epsilon),
            can_scroll_right: carousel
                && self
                    .scroll
                    .can_scroll_right(epsilon, self.config.right_affordance),
            arrows_visible: carousel && self.section_hovered,
            explore_hint: carousel && self.config.explore_hint && self.section_hovered,
            active: self.hover.active(),
            cards: self
                .movies
                .iter()
                .map(|movie| {
                    render_styled_card(
                        movie,
                        self.hover.is_active(movie.id),
                        self.config.card_style,
                        &self.images,
                    )
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::browse::config::RightAffordance;
    use crate::modules::catalog::domain::entities::movie::sample_movie;

    fn renderer(count: u64, config: ListConfig) -> ListRenderer {
        let movies = (1..=count)
            .map(|id| sample_movie(id, &format!("Movie {}", id)))
            .collect();
        ListRenderer::new(
            CategorySection::new("Popular", Category::Popular, movies),
            config,
            ImageResolver::default(),
        )
    }

    fn id(value: u64) -> MovieId {
        MovieId::new(value).unwrap()
    }

    #[test]
    fn test_layout_chosen_by_count() {
        assert_eq!(renderer(5, ListConfig::section()).layout(), LayoutMode::Grid);
        assert_eq!(renderer(6, ListConfig::section()).layout(), LayoutMode::Carousel);
        assert_eq!(renderer(0, ListConfig::strip()).layout(), LayoutMode::Grid);
        assert_eq!(renderer(1, ListConfig::strip()).layout(), LayoutMode::Carousel);
    }

    #[test]
    fn test_single_active_card() {
        let mut list = renderer(3, ListConfig::section());
        list.handle(ListEvent::PointerEnter { id: id(1) });
        list.handle(ListEvent::PointerEnter { id: id(2) });

        let view = list.render();
        let expanded: Vec<MovieId> = view
            .cards
            .iter()
            .filter(|card| card.is_expanded())
            .map(|card| card.summary().id)
            .collect();
        assert_eq!(expanded, vec![id(2)]);
        assert_eq!(view.active, Some(id(2)));
    }

    #[test]
    fn test_unknown_id_ignored() {
        let mut list = renderer(3, ListConfig::section());
        list.handle(ListEvent::PointerEnter { id: id(1) });

        assert!(!list.handle(ListEvent::PointerEnter { id: id(99) }));
        assert!(!list.handle(ListEvent::PointerLeave { id: id(99) }));
        assert_eq!(list.active(), Some(id(1)));
    }

    #[test]
    fn test_scroll_is_noop_in_grid() {
        let mut list = renderer(3, ListConfig::section());
        list.handle(ListEvent::Resize {
            viewport_width: 1000.0,
            content_width: 0.0,
        });

        assert!(!list.handle(ListEvent::Scroll {
            direction: ScrollDirection::Right
        }));
        assert_eq!(list.scroll_state().offset, 0.0);
        assert!(!list.render().can_scroll_right);
    }

    #[test]
    fn test_viewport_scroll_before_resize_is_a_no_op() {
        let mut list = renderer(10, ListConfig::section());
        assert_eq!(list.layout(), LayoutMode::Carousel);

        assert!(!list.handle(ListEvent::Scroll {
            direction: ScrollDirection::Right
        }));
        assert_eq!(list.scroll_state().offset, 0.0);

        list.handle(ListEvent::Resize {
            viewport_width: 800.0,
            content_width: 0.0,
        });
        assert!(list.handle(ListEvent::Scroll {
            direction: ScrollDirection::Right
        }));
        assert_eq!(list.scroll_state().offset, 600.0);
    }

    #[test]
    fn test_carousel_scroll_and_arrows() {
        let mut list = renderer(10, ListConfig::section());
        list.handle(ListEvent::Resize {
            viewport_width: 1000.0,
            content_width: 0.0,
        });

        let view = list.render();
        assert!(!view.can_scroll_left);
        assert!(view.can_scroll_right);
        assert!(!view.arrows_visible);
        assert!(!view.explore_hint);

        list.handle(ListEvent::SectionEnter);
        list.handle(ListEvent::Scroll {
            direction: ScrollDirection::Right,
        });
        let view = list.render();
        assert_eq!(view.offset, 750.0);
        assert!(view.can_scroll_left);
        assert!(view.arrows_visible);
        assert!(view.explore_hint);

        list.handle(ListEvent::Scroll {
            direction: ScrollDirection::Left,
        });
        list.handle(ListEvent::Scroll {
            direction: ScrollDirection::Left,
        });
        assert_eq!(list.render().offset, 0.0);
        assert!(!list.render().can_scroll_left);
    }

    #[test]
    fn test_strip_scrolls_fixed_step_without_hint() {
        let mut list = renderer(2, ListConfig::strip());
        list.handle(ListEvent::SectionEnter);
        list.handle(ListEvent::Scroll {
            direction: ScrollDirection::Right,
        });

        let view = list.render();
        assert_eq!(view.offset, 800.0);
        assert!(!view.explore_hint);
    }

    #[test]
    fn test_boundary_checked_right_arrow() {
        let config = ListConfig::section().with_right_affordance(RightAffordance::BoundaryChecked);
        let mut list = renderer(8, config);
        list.handle(ListEvent::Resize {
            viewport_width: 1000.0,
            content_width: 1600.0,
        });
        list.handle(ListEvent::ScrollReported { offset: 600.0 });

        let view = list.render();
        assert_eq!(view.offset, 600.0);
        assert!(!view.can_scroll_right);
    }

    #[test]
    fn test_events_never_touch_items() {
        let mut list = renderer(6, ListConfig::section());
        let before: Vec<MovieId> = list.movies().iter().map(|m| m.id).collect();

        list.handle(ListEvent::PointerEnter { id: id(3) });
        list.handle(ListEvent::Scroll {
            direction: ScrollDirection::Right,
        });
        list.handle(ListEvent::PointerLeave { id: id(3) });

        let after: Vec<MovieId> = list.movies().iter().map(|m| m.id).collect();
        assert_eq!(before, after);
        assert_eq!(list.active(), None);
    }
}
