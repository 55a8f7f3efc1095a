//! Assembles Flux record queries around transpiled filter fragments.

pub mod chart;
pub mod config;
pub mod error;
pub mod range;
pub mod record;
pub mod token;

pub use chart::{ChartQuery, aggregation_window_offset};
pub use config::QueryConfig;
pub use error::{PlanError, Result};
pub use range::RangeBounds;
pub use record::{RecordQuery, RenderedQuery};
pub use token::PageToken;
