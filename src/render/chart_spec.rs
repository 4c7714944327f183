use serde::{Deserialize, Serialize};

use crate::core::TimePoint;

use super::options::ChartOptions;

pub const BAR_BACKGROUND_COLOR: &str = "#3B82F6";
pub const BAR_BORDER_COLOR: &str = "#2563EB";
pub const BAR_BORDER_WIDTH: f64 = 1.0;
pub const BAR_BORDER_RADIUS: f64 = 4.0;

pub const LINE_BACKGROUND_COLOR: &str = "transparent";
pub const LINE_TENSION: f64 = 0.2;
pub const LINE_POINT_RADIUS: f64 = 0.0;
pub const LINE_BORDER_WIDTH: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
}

/// Series payload handed to the chart library: plain values aligned with
/// `ChartData::labels`, or `{x, y}` points on a time scale.
///
/// An empty series reads back as `Values`; [`ChartSpec`] deserialization
/// restores the variant from the chart kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesData {
    Values(Vec<f64>),
    Points(Vec<TimePoint>),
}

impl SeriesData {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Values(values) => values.len(),
            Self::Points(points) => points.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn as_values(&self) -> Option<&[f64]> {
        match self {
            Self::Values(values) => Some(values),
            Self::Points(_) => None,
        }
    }

    #[must_use]
    pub fn as_points(&self) -> Option<&[TimePoint]> {
        match self {
            Self::Points(points) => Some(points),
            Self::Values(_) => None,
        }
    }

    fn empty_for(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Bar => Self::Values(Vec::new()),
            ChartKind::Line => Self::Points(Vec::new()),
        }
    }
}

/// One plotted series with its styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSpec {
    pub label: String,
    pub data: SeriesData,
    pub border_color: String,
    pub background_color: String,
    pub border_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f64>,
}

impl DatasetSpec {
    #[must_use]
    pub fn bar(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data: SeriesData::Values(values),
            border_color: BAR_BORDER_COLOR.to_owned(),
            background_color: BAR_BACKGROUND_COLOR.to_owned(),
            border_width: BAR_BORDER_WIDTH,
            border_radius: Some(BAR_BORDER_RADIUS),
            tension: None,
            point_radius: None,
        }
    }

    #[must_use]
    pub fn line(label: impl Into<String>, color: impl Into<String>, points: Vec<TimePoint>) -> Self {
        Self {
            label: label.into(),
            data: SeriesData::Points(points),
            border_color: color.into(),
            background_color: LINE_BACKGROUND_COLOR.to_owned(),
            border_width: LINE_BORDER_WIDTH,
            border_radius: None,
            tension: Some(LINE_TENSION),
            point_radius: Some(LINE_POINT_RADIUS),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    pub datasets: Vec<DatasetSpec>,
}

/// Everything the chart library needs to build or redraw a chart.
///
/// The serialized form follows the chart library's own configuration shape
/// so a host can pass it straight through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ChartSpecRepr")]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Deserialize)]
struct ChartSpecRepr {
    #[serde(rename = "type")]
    kind: ChartKind,
    data: ChartData,
    options: ChartOptions,
}

impl From<ChartSpecRepr> for ChartSpec {
    fn from(repr: ChartSpecRepr) -> Self {
        let mut data = repr.data;
        for dataset in &mut data.datasets {
            if dataset.data.is_empty() {
                dataset.data = SeriesData::empty_for(repr.kind);
            }
        }
        Self {
            kind: repr.kind,
            data,
            options: repr.options,
        }
    }
}

impl ChartSpec {
    #[must_use]
    pub fn bar(labels: Vec<String>, dataset: DatasetSpec) -> Self {
        Self {
            kind: ChartKind::Bar,
            data: ChartData {
                labels,
                datasets: vec![dataset],
            },
            options: ChartOptions::bar(),
        }
    }

    #[must_use]
    pub fn line(datasets: Vec<DatasetSpec>) -> Self {
        Self {
            kind: ChartKind::Line,
            data: ChartData {
                labels: Vec::new(),
                datasets,
            },
            options: ChartOptions::line(),
        }
    }

    #[must_use]
    pub fn dataset_count(&self) -> usize {
        self.data.datasets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartSpec, DatasetSpec, SeriesData};
    use crate::core::TimePoint;
    use serde_json::json;

    #[test]
    fn bar_spec_serializes_in_library_shape() {
        let spec = ChartSpec::bar(vec!["A".to_owned()], DatasetSpec::bar("value", vec![5.0]));
        let value = serde_json::to_value(&spec).expect("serialize");
        assert_eq!(value["type"], json!("bar"));
        assert_eq!(value["data"]["labels"], json!(["A"]));
        assert_eq!(value["data"]["datasets"][0]["backgroundColor"], json!("#3B82F6"));
        assert_eq!(value["data"]["datasets"][0]["borderRadius"], json!(4.0));
        assert_eq!(value["options"]["animation"]["duration"], json!(300));
    }

    #[test]
    fn line_dataset_serializes_points() {
        let spec = ChartSpec::line(vec![DatasetSpec::line(
            "cpu",
            "#10B981",
            vec![TimePoint::new(1000.0, 2.0)],
        )]);
        let value = serde_json::to_value(&spec).expect("serialize");
        assert!(value["data"].get("labels").is_none());
        assert_eq!(
            value["data"]["datasets"][0]["data"],
            json!([{"x": 1000.0, "y": 2.0}])
        );
        assert_eq!(value["data"]["datasets"][0]["tension"], json!(0.2));
    }

    #[test]
    fn empty_series_read_back_as_their_chart_kind() {
        let line = ChartSpec::line(vec![DatasetSpec::line("cpu", "#10B981", Vec::new())]);
        let json = serde_json::to_string(&line).expect("serialize");
        let parsed: ChartSpec = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed.data.datasets[0].data, SeriesData::Points(Vec::new()));
        assert_eq!(parsed, line);

        let bar = ChartSpec::bar(Vec::new(), DatasetSpec::bar("value", Vec::new()));
        let json = serde_json::to_string(&bar).expect("serialize");
        let parsed: ChartSpec = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed, bar);
    }
}
