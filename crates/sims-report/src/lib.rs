//! Station record queries for the dashboard: filters, free-text search,
//! sorting, summary counts and chart series.
//!
//! Every function takes a [`RecordSet`](sims_model::RecordSet) and returns a
//! new value; nothing is cached between calls.

mod error;
pub mod filter;
pub mod icons;
pub mod search;
pub mod sort;
pub mod summary;
pub mod trend;

pub use error::{ReportError, Result};
pub use filter::{FilterOptions, RecordFilter};
pub use icons::{DEFAULT_ICON, service_icon};
pub use search::search;
pub use sort::{SortKey, SortOrder, sort_records};
pub use summary::{
    CoordinateCoverage, Count, DEFAULT_MAP_CENTER, DatasetSummary, MapCenter,
    ServiceCityCrosstab, TOP_N, service_city_crosstab, value_counts,
};
pub use trend::{DatePoint, date_trend};
