//! Module providing data visualization functionality
//!
//! ## ASCII Visualization
//!
//! The `ascii` submodule renders horizontal bar charts as plain text:
//!
//! - Centered chart titles
//! - Left-justified labels aligned on the longest one
//! - Bars scaled so the longest fits the display width

pub mod ascii;

pub use self::ascii::{
    center_text, print_bar_chart, write_bar_chart, BarChart, BarChartConfig, Chart, ChartConfig,
    ChartStyle,
};
