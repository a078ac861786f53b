//! Grouped statistics over retail transactions, rendered as terminal bar charts
//!
//! Transactions are grouped by a derived key (hour of day, week of month,
//! payment method, item, store section) and each group is reduced to a
//! count, sum, average or distinct count. The results are printed as
//! horizontal bar charts.

pub mod analytics;
pub mod dataset;
pub mod error;
pub mod groupby;
pub mod series;
pub mod temporal;
pub mod vis;

// Re-export commonly used types
pub use analytics::{all_series, View, ViewCategory};
pub use dataset::{monthly_transactions, Item, Transaction};
pub use error::{Error, Result};
pub use groupby::{aggregate, Aggregate, GroupBy, KeyOrder};
pub use series::ChartSeries;
pub use vis::{print_bar_chart, write_bar_chart, BarChart, Chart};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
