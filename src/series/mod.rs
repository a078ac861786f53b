use crate::error::{Error, Result};

/// A titled sequence of label/value pairs ready for charting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    title: String,
    labels: Vec<String>,
    values: Vec<i64>,
}

impl ChartSeries {
    /// Create a series from parallel label and value vectors
    ///
    /// Fails with `InvalidArgument` if the lengths differ.
    pub fn new(title: impl Into<String>, labels: Vec<String>, values: Vec<i64>) -> Result<Self> {
        if labels.len() != values.len() {
            return Err(Error::length_mismatch(labels.len(), values.len()));
        }

        Ok(ChartSeries {
            title: title.into(),
            labels,
            values,
        })
    }

    /// Create a series from label/value pairs
    pub fn from_pairs<I, L>(title: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, i64)>,
        L: Into<String>,
    {
        let (labels, values) = pairs
            .into_iter()
            .map(|(label, value)| (label.into(), value))
            .unzip();

        ChartSeries {
            title: title.into(),
            labels,
            values,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value for `label`, if present
    pub fn get(&self, label: &str) -> Option<i64> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.values[i])
    }

    /// Iterate over `(label, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Sum of all values
    pub fn total(&self) -> i64 {
        self.values.iter().sum()
    }
}
