pub mod catalog;
pub mod catalog_matcher;
pub mod complexity;
pub mod default_catalog;
pub mod explanations;
pub mod pricing;
pub mod reference_data;
pub mod scenario_matching;
pub mod sizing;
pub mod text_signals;
pub mod units;
