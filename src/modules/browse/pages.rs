use serde::Serialize;

use super::config::ListConfig;
use super::detail_page::DetailPageView;
use super::list_renderer::{ListEvent, ListRenderer, ListView};
use crate::modules::aggregation::{CatalogPage, SectionFailure};
use crate::modules::catalog::ImageResolver;
use crate::shared::errors::AppError;

/// Serializable snapshot of the current page, handed to the host.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView {
    Catalog {
        route: String,
        title: Option<String>,
        sections: Vec<ListView>,
        failed_sections: Vec<SectionFailure>,
    },
    Detail {
        route: String,
        detail: DetailPageView,
    },
    /// Terse fallback shown instead of any partial or stale content.
    Failed {
        route: String,
        message: String,
        error: AppError,
    },
}

impl PageView {
    pub fn route(&self) -> &str {
        match self {
            PageView::Catalog { route, .. }
            | PageView::Detail { route, .. }
            | PageView::Failed { route, .. } => route,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PageView::Failed { .. })
    }
}

/// Interactive state of a page made of lists: one renderer per section.
#[derive(Debug, Clone)]
pub struct CatalogScreen {
    title: Option<String>,
    lists: Vec<ListRenderer>,
    failures: Vec<SectionFailure>,
}

impl CatalogScreen {
    pub fn new(
        title: Option<String>,
        page: CatalogPage,
        config: ListConfig,
        images: &ImageResolver,
    ) -> Self {
        let lists = page
            .sections
            .into_iter()
            .map(|section| ListRenderer::new(section, config, images.clone()))
            .collect();

        Self {
            title,
            lists,
            failures: page.failures,
        }
    }

    pub fn lists(&self) -> &[ListRenderer] {
        &self.lists
    }

    /// Route an event to the list labelled `label`. `None` if no such list.
    pub fn dispatch(&mut self, label: &str, event: ListEvent) -> Option<ListView> {
        let list = self.lists.iter_mut().find(|list| list.label() == label)?;
        list.handle(event);
        Some(list.render())
    }

    fn render(&self, route: &str) -> PageView {
        PageView::Catalog {
            route: route.to_string(),
            title: self.title.clone(),
            sections: self.lists.iter().map(ListRenderer::render).collect(),
            failed_sections: self.failures.clone(),
        }
    }
}

/// What the session currently shows.
#[derive(Debug, Clone)]
pub enum Screen {
    Catalog(CatalogScreen),
    Detail(Box<DetailPageView>),
    Failed { message: String, error: AppError },
}

impl Screen {
    pub fn render(&self, route: &str) -> PageView {
        match self {
            Screen::Catalog(screen) => screen.render(route),
            Screen::Detail(detail) => PageView::Detail {
                route: route.to_string(),
                detail: detail.as_ref().clone(),
            },
            Screen::Failed { message, error } => PageView::Failed {
                route: route.to_string(),
                message: message.clone(),
                error: error.clone(),
            },
        }
    }

    pub fn dispatch(&mut self, label: &str, event: ListEvent) -> Option<ListView> {
        match self {
            Screen::Catalog(screen) => screen.dispatch(label, event),
            Screen::Detail(_) | Screen::Failed { .. } => None,
        }
    }
}
