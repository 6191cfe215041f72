//! Chart specification document consumed by the dashboard's charting
//! frontend (Highcharts option layout).

use crate::utils::config::{DEFAULT_CHART_TYPE, DURATION_AXIS_TITLE, DURATION_AXIS_TYPE};
use serde::{Deserialize, Serialize};

/// Top-level chart document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub chart: ChartOptions,

    pub title: Title,

    pub series: Vec<ChartSeries>,

    pub x_axis: Axis,

    pub y_axis: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(rename = "type")]
    pub chart_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<String>,

    pub title: Title,
}

/// A single named series; `data` is a list of `[x, y]` pairs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,

    pub data: serde_json::Value,

    #[serde(rename = "type")]
    pub series_type: String,
}

/// Input for [`build_chart`]: series name, points, optional chart type override
pub struct SeriesInput {
    pub name: String,
    pub data: serde_json::Value,
    pub series_type: Option<String>,
}

impl SeriesInput {
    /// Wrap any serializable point list, e.g. `Vec<(i64, u64)>`
    pub fn new<P: Serialize>(name: impl Into<String>, points: &[P]) -> Result<Self, serde_json::Error> {
        Ok(Self {
            name: name.into(),
            data: serde_json::to_value(points)?,
            series_type: None,
        })
    }

    pub fn with_type(mut self, series_type: impl Into<String>) -> Self {
        self.series_type = Some(series_type.into());
        self
    }
}

/// Wrap series into a chart document over the aligned duration axis
///
/// Series without their own type inherit `chart_type`
/// (default [`DEFAULT_CHART_TYPE`]).
pub fn build_chart(title: &str, series: Vec<SeriesInput>, chart_type: Option<&str>) -> ChartSpec {
    let chart_type = chart_type.unwrap_or(DEFAULT_CHART_TYPE);

    ChartSpec {
        chart: ChartOptions {
            chart_type: chart_type.to_string(),
        },
        title: Title {
            text: title.to_string(),
        },
        series: series
            .into_iter()
            .map(|s| ChartSeries {
                name: s.name,
                data: s.data,
                series_type: s.series_type.unwrap_or_else(|| chart_type.to_string()),
            })
            .collect(),
        x_axis: Axis {
            axis_type: Some(DURATION_AXIS_TYPE.to_string()),
            title: Title {
                text: DURATION_AXIS_TITLE.to_string(),
            },
        },
        y_axis: Axis {
            axis_type: None,
            title: Title {
                text: title.to_string(),
            },
        },
    }
}
