//! Horizontal bar chart

use std::io::Write;

use log::trace;

use super::{Chart, ChartConfig, ChartStyle};
use crate::error::{Error, Result};
use crate::series::ChartSeries;

/// Configuration for bar chart
#[derive(Debug, Clone)]
pub struct BarChartConfig {
    /// Base chart config
    pub base: ChartConfig,
    /// Chart style
    pub style: ChartStyle,
    /// Largest value drawn at one glyph per unit; larger maxima are scaled
    pub scale_threshold: i64,
    /// Show values after bars
    pub show_values: bool,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            base: ChartConfig::default(),
            style: ChartStyle::Unicode,
            scale_threshold: 50,
            show_values: true,
        }
    }
}

/// Bar chart for categorical data
#[derive(Debug, Clone)]
pub struct BarChart {
    /// Labels for each bar
    labels: Vec<String>,
    /// Values for each bar
    values: Vec<i64>,
    /// Configuration
    config: BarChartConfig,
}

impl BarChart {
    /// Create a bar chart with the default configuration
    pub fn new<S: AsRef<str>>(title: &str, labels: &[S], values: &[i64]) -> Result<Self> {
        let config = BarChartConfig {
            base: ChartConfig {
                title: Some(title.to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        Self::with_config(labels, values, config)
    }

    /// Create with custom configuration
    ///
    /// Fails with `InvalidArgument` when `labels` and `values` differ in length.
    pub fn with_config<S: AsRef<str>>(
        labels: &[S],
        values: &[i64],
        config: BarChartConfig,
    ) -> Result<Self> {
        if labels.len() != values.len() {
            return Err(Error::length_mismatch(labels.len(), values.len()));
        }

        Ok(Self {
            labels: labels.iter().map(|s| s.as_ref().to_string()).collect(),
            values: values.to_vec(),
            config,
        })
    }

    /// Chart a series, using its title
    pub fn from_series(series: &ChartSeries) -> Self {
        Self {
            labels: series.labels().to_vec(),
            values: series.values().to_vec(),
            config: BarChartConfig {
                base: ChartConfig {
                    title: Some(series.title().to_string()),
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    /// Largest value, 0 for an empty or all-negative chart
    pub fn max_value(&self) -> i64 {
        self.values.iter().copied().fold(0, i64::max)
    }

    /// Divisor applied to values so the longest bar fits
    pub fn scale_factor(&self) -> i64 {
        let max = self.max_value();
        let threshold = self.config.scale_threshold;
        if threshold > 0 && max > threshold {
            max / threshold
        } else {
            1
        }
    }

    fn max_label_len(&self) -> usize {
        self.labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
    }

    fn bar(&self, value: i64, scale: i64) -> String {
        let len = (value / scale).max(0) as usize;
        std::iter::repeat(self.config.style.bar_char())
            .take(len)
            .collect()
    }
}

impl Chart for BarChart {
    fn render(&self) -> String {
        let mut output = String::new();
        let scale = self.scale_factor();
        let label_width = self.max_label_len();

        trace!(
            "rendering {} bars, max {} scale {}",
            self.values.len(),
            self.max_value(),
            scale
        );

        // Title
        if let Some(title) = self.config.base.title.as_deref().filter(|t| !t.is_empty()) {
            output.push_str(&center_text(title, self.config.base.width));
            output.push_str("\n\n");
        }

        for (label, &value) in self.labels.iter().zip(self.values.iter()) {
            let bar = self.bar(value, scale);
            if self.config.show_values {
                output.push_str(&format!(
                    "{:<label_width$} | {} ({})\n\n",
                    label,
                    bar,
                    value,
                    label_width = label_width
                ));
            } else {
                output.push_str(&format!(
                    "{:<label_width$} | {}\n\n",
                    label,
                    bar,
                    label_width = label_width
                ));
            }
        }

        output
    }
}

/// Left-pad `text` so it sits in the middle of `width` columns
pub fn center_text(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.chars().count()) / 2;
    format!("{}{}", " ".repeat(padding), text)
}

/// Render a bar chart to `out`
///
/// Nothing is written when `labels` and `values` differ in length.
pub fn write_bar_chart<W, S>(out: &mut W, title: &str, labels: &[S], values: &[i64]) -> Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    let chart = BarChart::new(title, labels, values)?;
    chart.write_to(out)
}

/// Render a bar chart to stdout
pub fn print_bar_chart<S: AsRef<str>>(title: &str, labels: &[S], values: &[i64]) -> Result<()> {
    BarChart::new(title, labels, values)?.display()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_chart_layout() {
        let chart = BarChart::new("", &["A", "BBB"], &[3, 1]).unwrap();
        assert_eq!(chart.render(), "A   | ███ (3)\n\nBBB | █ (1)\n\n");
    }

    #[test]
    fn test_title_centered() {
        let chart = BarChart::new("Test Chart", &["A"], &[1]).unwrap();
        let output = chart.render();
        let first = output.lines().next().unwrap();
        assert_eq!(first, format!("{}Test Chart", " ".repeat(35)));
        assert_eq!(output.lines().nth(1), Some(""));
    }

    #[test]
    fn test_long_title_not_padded() {
        let title = "x".repeat(90);
        assert_eq!(center_text(&title, 80), title);
    }

    #[test]
    fn test_scale_factor() {
        let small = BarChart::new("", &["a", "b"], &[50, 10]).unwrap();
        assert_eq!(small.scale_factor(), 1);

        let large = BarChart::new("", &["a", "b"], &[120, 30]).unwrap();
        assert_eq!(large.scale_factor(), 2);
        let output = large.render();
        assert!(output.contains(&format!("a | {} (120)", "█".repeat(60))));
        assert!(output.contains(&format!("b | {} (30)", "█".repeat(15))));
    }

    #[test]
    fn test_length_mismatch() {
        let result = BarChart::new("t", &["a", "b", "c"], &[1, 2]);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_write_bar_chart_mismatch_writes_nothing() {
        let mut buf = Vec::new();
        let result = write_bar_chart(&mut buf, "t", &["a", "b", "c"], &[1, 2]);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_empty_chart_prints_title_only() {
        let labels: [&str; 0] = [];
        let chart = BarChart::new("Empty", &labels, &[]).unwrap();
        assert_eq!(chart.max_value(), 0);
        assert_eq!(chart.render(), format!("{}Empty\n\n", " ".repeat(37)));
    }

    #[test]
    fn test_negative_value_draws_no_bar() {
        let chart = BarChart::new("", &["a"], &[-4]).unwrap();
        assert_eq!(chart.render(), "a |  (-4)\n\n");
    }

    #[test]
    fn test_ascii_style_without_values() {
        let config = BarChartConfig {
            style: ChartStyle::Ascii,
            show_values: false,
            ..Default::default()
        };
        let chart = BarChart::with_config(&["ab", "c"], &[2, 1], config).unwrap();
        assert_eq!(chart.render(), "ab | ##\n\nc  | #\n\n");
    }

    #[test]
    fn test_from_series() {
        let series = ChartSeries::from_pairs("Sales", vec![("x", 2)]);
        let chart = BarChart::from_series(&series);
        assert!(chart.render().ends_with("x | ██ (2)\n\n"));
    }
}
