pub mod config;
pub mod detail_page;
pub mod hover;
pub mod item_card;
pub mod list_renderer;
pub mod pages;
pub mod scroll;

pub use config::{CardStyle, DisplayLimits, ListConfig, RightAffordance, ScrollStep};
pub use detail_page::DetailPageView;
pub use hover::HoverState;
pub use item_card::{render_card, render_styled_card, CardAction, CardView};
pub use list_renderer::{ListEvent, ListRenderer, ListView};
pub use pages::{CatalogScreen, PageView, Screen};
pub use scroll::{LayoutMode, ScrollDirection, ScrollState};
