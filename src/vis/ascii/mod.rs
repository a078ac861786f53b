//! Text-based bar charts for terminal output
//!
//! Renders labelled integer values as horizontal bars of block characters,
//! scaled down so the longest bar stays within a fixed width.

mod charts;

use std::io::{self, Write};

use crate::error::Result;

pub use charts::{center_text, print_bar_chart, write_bar_chart, BarChart, BarChartConfig};

/// Chart rendering trait
pub trait Chart {
    /// Render the chart to a string
    fn render(&self) -> String;

    /// Write the rendered chart to `out`
    fn write_to(&self, out: &mut dyn Write) -> Result<()> {
        out.write_all(self.render().as_bytes())?;
        Ok(())
    }

    /// Render to stdout
    fn display(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle)?;
        handle.flush()?;
        Ok(())
    }
}

/// Common chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Chart width in characters
    pub width: usize,
    /// Title for the chart
    pub title: Option<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 80,
            title: None,
        }
    }
}

/// Chart style options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartStyle {
    /// Simple ASCII characters
    Ascii,
    /// Unicode block characters
    #[default]
    Unicode,
}

impl ChartStyle {
    /// Character a bar is drawn with
    pub fn bar_char(self) -> char {
        match self {
            ChartStyle::Ascii => '#',
            ChartStyle::Unicode => '█',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_config_default() {
        let config = ChartConfig::default();
        assert_eq!(config.width, 80);
        assert!(config.title.is_none());
    }

    #[test]
    fn test_style_chars() {
        assert_eq!(ChartStyle::default(), ChartStyle::Unicode);
        assert_eq!(ChartStyle::Unicode.bar_char(), '█');
        assert_eq!(ChartStyle::Ascii.bar_char(), '#');
    }

    #[test]
    fn test_write_to_buffer() {
        let chart = BarChart::new("", &["a"], &[2]).unwrap();
        let mut buf = Vec::new();
        chart.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a | ██ (2)\n\n");
    }
}
