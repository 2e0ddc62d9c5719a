use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::policy::{run_bounded, AggregationConfig, FailurePolicy};
use crate::modules::catalog::{Category, CategorySection, MetadataSource, Movie, FIRST_PAGE};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::TimedOperation;

/// One labelled list on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub label: String,
    pub category: Category,
}

/// Ordered label → category mapping. Entry order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPlan {
    scope: String,
    entries: Vec<SectionSpec>,
}

impl SectionPlan {
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_section(mut self, label: impl Into<String>, category: Category) -> Self {
        self.entries.push(SectionSpec {
            label: label.into(),
            category,
        });
        self
    }

    /// The home page: popular, top rated, upcoming, latest.
    pub fn landing() -> Self {
        Self::new("landing")
            .with_section("Popular", Category::Popular)
            .with_section("Top Rated", Category::TopRated)
            .with_section("Upcoming", Category::Upcoming)
            .with_section("Latest", Category::Latest)
    }

    /// A page made of one category list.
    pub fn single(category: Category) -> Self {
        Self::new(category.key()).with_section(category.display_name(), category)
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn entries(&self) -> &[SectionSpec] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A section that could not be loaded under `FailurePolicy::PartialSuccess`.
#[derive(Debug, Clone, Serialize)]
pub struct SectionFailure {
    pub label: String,
    pub category: Category,
    pub error: AppError,
}

/// Result of a successful section aggregation.
#[derive(Debug, Clone)]
pub struct CatalogPage {
    pub sections: Vec<CategorySection>,
    /// Always empty under `AllOrNothing`.
    pub failures: Vec<SectionFailure>,
}

impl CatalogPage {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Fans out one request per section and joins on all of them.
pub struct SectionAggregator {
    source: Arc<dyn MetadataSource>,
    config: AggregationConfig,
}

impl SectionAggregator {
    pub fn new(source: Arc<dyn MetadataSource>, config: AggregationConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Fetch every section of `plan` concurrently.
    ///
    /// Completes once all requests have settled (a failure does not cut its
    /// siblings short), then applies the configured failure policy. Cancelling
    /// `cancel` or passing the deadline drops all in-flight requests.
    pub async fn aggregate(
        &self,
        plan: &SectionPlan,
        cancel: &CancellationToken,
    ) -> AppResult<CatalogPage> {
        if plan.is_empty() {
            return Ok(CatalogPage {
                sections: Vec::new(),
                failures: Vec::new(),
            });
        }

        let timer = TimedOperation::new(&format!("section aggregation '{}'", plan.scope()));
        let source = self.source.as_ref();

        let fetches = plan.entries().iter().map(|spec| async move {
            let result = source.fetch_category(spec.category, FIRST_PAGE).await;
            (spec, result)
        });

        let settled = run_bounded(join_all(fetches), plan.scope(), cancel, self.config.deadline)
            .await
            .map_err(|e| {
                warn!(scope = plan.scope(), error = %e, "section aggregation abandoned");
                e
            })?;

        let page = self.apply_policy(plan, settled)?;
        timer.finish_with_info(&format!(
            "{} sections, {} failed",
            page.sections.len(),
            page.failures.len()
        ));
        Ok(page)
    }

    fn apply_policy(
        &self,
        plan: &SectionPlan,
        settled: Vec<(&SectionSpec, AppResult<Vec<Movie>>)>,
    ) -> AppResult<CatalogPage> {
        let mut sections = Vec::with_capacity(settled.len());
        let mut failures = Vec::new();

        for (spec, result) in settled {
            match result {
                Ok(movies) => {
                    sections.push(CategorySection::new(spec.label.clone(), spec.category, movies))
                }
                Err(error) => {
                    warn!(
                        scope = plan.scope(),
                        label = %spec.label,
                        category = spec.category.key(),
                        error = %error,
                        "section fetch failed"
                    );
                    failures.push(SectionFailure {
                        label: spec.label.clone(),
                        category: spec.category,
                        error,
                    });
                }
            }
        }

        let fail_whole_page = match self.config.failure_policy {
            FailurePolicy::AllOrNothing => !failures.is_empty(),
            FailurePolicy::PartialSuccess => sections.is_empty() && !failures.is_empty(),
        };

        if fail_whole_page {
            // Plan order: the first failed section is the reported cause.
            let first = failures.swap_remove(0);
            return Err(AppError::AggregationFailed {
                scope: format!("{} (section '{}')", plan.scope(), first.label),
                source: Box::new(first.error),
            });
        }

        info!(
            scope = plan.scope(),
            sections = sections.len(),
            failed = failures.len(),
            "sections aggregated"
        );

        Ok(CatalogPage { sections, failures })
    }
}
