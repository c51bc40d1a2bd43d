//! Platform performance chart (`/platformPerformance`)

use serde::{Deserialize, Serialize};

/// One line of the performance chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    #[serde(default)]
    pub data: Vec<f64>,
}

/// Chart document: x-axis categories and one data series per metric
///
/// Missing arrays decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartData {
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.series.is_empty()
    }

    /// Largest data point across all series
    pub fn max_value(&self) -> Option<f64> {
        self.series
            .iter()
            .flat_map(|s| s.data.iter().copied())
            .reduce(f64::max)
    }
}
