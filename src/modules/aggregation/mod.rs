pub mod detail_aggregator;
pub mod policy;
pub mod section_aggregator;

pub use detail_aggregator::{
    fetch_detail_bundle, DetailAggregator, DetailBundle, MovieDetailView, COMPOSER_JOBS,
    DIRECTOR_JOB,
};
pub use policy::{run_bounded, AggregationConfig, FailurePolicy};
pub use section_aggregator::{
    CatalogPage, SectionAggregator, SectionFailure, SectionPlan, SectionSpec,
};
