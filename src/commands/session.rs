use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use super::navigation::Route;
use crate::modules::aggregation::{DetailAggregator, SectionAggregator};
use crate::modules::browse::{
    CatalogScreen, DetailPageView, DisplayLimits, ListConfig, ListEvent, ListView, PageView,
    Screen,
};
use crate::modules::catalog::{ImageResolver, MetadataSource, TmdbClient};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;

#[derive(Default)]
struct SessionState {
    in_flight: Option<CancellationToken>,
    current: Option<(Route, Screen)>,
}

/// One user's browsing surface: the current page and its list state.
///
/// Navigation replaces the page wholesale. Starting a navigation cancels the
/// previous one, and a result that arrives after a newer navigation began is
/// discarded rather than shown.
pub struct BrowseSession {
    sections: SectionAggregator,
    details: DetailAggregator,
    images: ImageResolver,
    section_list: ListConfig,
    strip_list: ListConfig,
    display: DisplayLimits,
    generation: AtomicU64,
    state: Mutex<SessionState>,
}

impl BrowseSession {
    pub fn new(source: Arc<dyn MetadataSource>, config: &AppConfig) -> Self {
        Self {
            sections: SectionAggregator::new(source.clone(), config.aggregation),
            details: DetailAggregator::new(source, config.aggregation),
            images: ImageResolver::new(&config.provider.image_base_url),
            section_list: config.list,
            strip_list: config.strip,
            display: config.display,
            generation: AtomicU64::new(0),
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Session backed by the TMDB client described in `config`.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let client = TmdbClient::new(&config.provider)?;
        Ok(Self::new(Arc::new(client), config))
    }

    /// Parse `path` and navigate to it.
    pub async fn open(&self, path: &str) -> AppResult<Option<PageView>> {
        let route: Route = path.parse()?;
        Ok(self.navigate(route).await)
    }

    /// Load and show `route`.
    ///
    /// Returns the rendered page, or `None` if this navigation was superseded
    /// by a newer one before it finished. A failed load still yields a page:
    /// the route's fallback message.
    pub async fn navigate(&self, route: Route) -> Option<PageView> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let cancel = CancellationToken::new();
        {
            let mut state = self.state.lock().await;
            if let Some(previous) = state.in_flight.replace(cancel.clone()) {
                log::debug!("Navigation to {} supersedes an in-flight navigation", route);
                previous.cancel();
            }
        }

        log::info!("Navigating to {}", route);
        let screen = match self.load(route, &cancel).await {
            Ok(screen) => screen,
            Err(error) if error.is_cancelled() => {
                log::debug!("Navigation to {} was cancelled", route);
                return None;
            }
            Err(error) => {
                LogContext::error_with_context(&error, &format!("Failed to load {}", route));
                Screen::Failed {
                    message: route.failure_message().to_string(),
                    error,
                }
            }
        };

        let mut state = self.state.lock().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!("Discarding stale result for {}", route);
            return None;
        }
        state.in_flight = None;
        let page = screen.render(&route.to_string());
        state.current = Some((route, screen));
        Some(page)
    }

    async fn load(&self, route: Route, cancel: &CancellationToken) -> AppResult<Screen> {
        match route {
            Route::Movie(id) => {
                let view = self.details.aggregate(id, cancel).await?;
                let detail = DetailPageView::render(&view, &self.display, &self.images);
                Ok(Screen::Detail(Box::new(detail)))
            }
            Route::Landing | Route::Category(_) => {
                let plan = route.plan().ok_or_else(|| {
                    AppError::InvalidInput(format!("{} has no sections", route))
                })?;
                let page = self.sections.aggregate(&plan, cancel).await?;
                let config = match route {
                    Route::Landing => self.section_list,
                    _ => self.strip_list,
                };
                let title = route.title().map(str::to_string);
                Ok(Screen::Catalog(CatalogScreen::new(title, page, config, &self.images)))
            }
        }
    }

    /// Cancel whatever navigation is in flight. The current page stays.
    pub async fn cancel_navigation(&self) {
        if let Some(token) = self.state.lock().await.in_flight.take() {
            token.cancel();
        }
    }

    /// Forward a list event to the section labelled `label` on the current page.
    pub async fn dispatch(&self, label: &str, event: ListEvent) -> Option<ListView> {
        let mut state = self.state.lock().await;
        let (_, screen) = state.current.as_mut()?;
        screen.dispatch(label, event)
    }

    pub async fn current_page(&self) -> Option<PageView> {
        let state = self.state.lock().await;
        state
            .current
            .as_ref()
            .map(|(route, screen)| screen.render(&route.to_string()))
    }

    pub async fn current_route(&self) -> Option<Route> {
        self.state.lock().await.current.as_ref().map(|(route, _)| *route)
    }
}
