use serde::Serialize;

/// Accent color used for the weight trend and calendar dots.
pub const PRIMARY_COLOR: &str = "#58A6FF";

/// Fixed palette for multi-series charts. Series colors are assigned by
/// the series' rank in sorted-name order, cycling when exhausted.
pub const CHART_COLORS: [&str; 20] = [
    "rgba(255, 99, 132, 1)",
    "rgba(54, 162, 235, 1)",
    "rgba(255, 206, 86, 1)",
    "rgba(75, 192, 192, 1)",
    "rgba(153, 102, 255, 1)",
    "rgba(255, 159, 64, 1)",
    "rgba(199, 199, 199, 1)",
    "rgba(83, 102, 255, 1)",
    "rgba(10, 206, 86, 1)",
    "rgba(255, 99, 255, 1)",
    "rgba(255, 159, 244, 1)",
    "rgba(54, 162, 10, 1)",
    "rgba(10, 206, 235, 1)",
    "rgba(255, 10, 86, 1)",
    "rgba(75, 192, 10, 1)",
    "rgba(153, 10, 255, 1)",
    "rgba(255, 159, 10, 1)",
    "rgba(199, 199, 10, 1)",
    "rgba(83, 10, 255, 1)",
    "rgba(10, 206, 10, 1)",
];

pub fn palette_color(rank: usize) -> &'static str {
    CHART_COLORS[rank % CHART_COLORS.len()]
}

/// One line in a chart. `data` is positionally aligned to the owning
/// chart's labels; `None` marks a date with no value for this series
/// (never zero, which would corrupt the trend).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub data: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(rename = "strokeWidth", skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<u32>,
}

impl Dataset {
    pub fn new(data: Vec<Option<f64>>) -> Self {
        Self {
            data,
            color: None,
            stroke_width: None,
        }
    }

    pub fn with_color(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_stroke_width(mut self, width: u32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn has_data(&self) -> bool {
        self.data.iter().any(Option::is_some)
    }
}

/// A renderable line chart: a shared label axis, one or more aligned
/// datasets, and a legend entry per dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub legend: Vec<String>,
}

impl ChartSeries {
    /// Drop every label position where all datasets are null, so the
    /// x-axis only shows dates where this chart has data. Idempotent.
    pub fn compact(&self) -> ChartSeries {
        let keep: Vec<usize> = (0..self.labels.len())
            .filter(|&i| self.datasets.iter().any(|ds| ds.data.get(i).copied().flatten().is_some()))
            .collect();

        ChartSeries {
            labels: keep.iter().map(|&i| self.labels[i].clone()).collect(),
            datasets: self
                .datasets
                .iter()
                .map(|ds| Dataset {
                    data: keep.iter().map(|&i| ds.data[i]).collect(),
                    color: ds.color,
                    stroke_width: ds.stroke_width,
                })
                .collect(),
            legend: self.legend.clone(),
        }
    }
}
