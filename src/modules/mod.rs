pub mod aggregation;
pub mod browse;
pub mod catalog;
