use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const GRID_COLOR: &str = "rgba(0, 0, 0, 0.05)";
pub const TOOLTIP_BACKGROUND_COLOR: &str = "rgba(0, 0, 0, 0.8)";
pub const ANIMATION_DURATION_MS: u32 = 300;

const BAR_X_MAX_TICKS: u32 = 10;
const LINE_X_MAX_TICKS: u32 = 6;
const LINE_TIME_DISPLAY_FORMAT: &str = "HH:mm";

/// Chart-wide presentation options, serialized in the chart library's
/// option shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction: Option<InteractionOptions>,
    pub scales: ScaleOptions,
    pub plugins: PluginOptions,
    pub animation: AnimationOptions,
}

impl ChartOptions {
    /// Category-axis bar chart: value axis anchored at zero, no legend.
    #[must_use]
    pub fn bar() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            interaction: None,
            scales: ScaleOptions {
                x: AxisOptions {
                    ticks: Some(TickOptions {
                        max_ticks_limit: BAR_X_MAX_TICKS,
                    }),
                    ..AxisOptions::hidden_grid()
                },
                y: AxisOptions {
                    begin_at_zero: Some(true),
                    ..AxisOptions::faint_grid()
                },
            },
            plugins: PluginOptions {
                legend: LegendOptions {
                    display: false,
                    position: None,
                    labels: None,
                },
                tooltip: TooltipOptions::default(),
            },
            animation: AnimationOptions::default(),
        }
    }

    /// Time-axis line chart: index-mode tooltips, legend on top.
    #[must_use]
    pub fn line() -> Self {
        let display_formats = IndexMap::from([
            ("minute".to_owned(), LINE_TIME_DISPLAY_FORMAT.to_owned()),
            ("hour".to_owned(), LINE_TIME_DISPLAY_FORMAT.to_owned()),
        ]);
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            interaction: Some(InteractionOptions {
                mode: InteractionMode::Index,
                intersect: false,
            }),
            scales: ScaleOptions {
                x: AxisOptions {
                    scale_type: Some(ScaleType::Time),
                    time: Some(TimeAxisOptions {
                        unit: TimeUnit::Minute,
                        display_formats,
                    }),
                    ticks: Some(TickOptions {
                        max_ticks_limit: LINE_X_MAX_TICKS,
                    }),
                    ..AxisOptions::hidden_grid()
                },
                y: AxisOptions {
                    begin_at_zero: Some(false),
                    ..AxisOptions::faint_grid()
                },
            },
            plugins: PluginOptions {
                legend: LegendOptions {
                    display: true,
                    position: Some(LegendPosition::Top),
                    labels: Some(LegendLabelOptions {
                        box_width: 12,
                        padding: 10,
                        font: FontOptions { size: 11 },
                    }),
                },
                tooltip: TooltipOptions::default(),
            },
            animation: AnimationOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    Index,
    Nearest,
    Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionOptions {
    pub mode: InteractionMode,
    pub intersect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleOptions {
    pub x: AxisOptions,
    pub y: AxisOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    Category,
    Linear,
    Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeAxisOptions {
    pub unit: TimeUnit,
    pub display_formats: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridOptions {
    pub display: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickOptions {
    pub max_ticks_limit: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub scale_type: Option<ScaleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeAxisOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    pub grid: GridOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticks: Option<TickOptions>,
}

impl AxisOptions {
    fn hidden_grid() -> Self {
        Self {
            scale_type: None,
            time: None,
            begin_at_zero: None,
            grid: GridOptions {
                display: false,
                color: None,
            },
            ticks: None,
        }
    }

    fn faint_grid() -> Self {
        Self {
            grid: GridOptions {
                display: true,
                color: Some(GRID_COLOR.to_owned()),
            },
            ..Self::hidden_grid()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginOptions {
    pub legend: LegendOptions,
    pub tooltip: TooltipOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontOptions {
    pub size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabelOptions {
    pub box_width: u32,
    pub padding: u32,
    pub font: FontOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendOptions {
    pub display: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<LegendPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<LegendLabelOptions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    pub background_color: String,
    pub title_font: FontOptions,
    pub body_font: FontOptions,
    pub padding: u32,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            background_color: TOOLTIP_BACKGROUND_COLOR.to_owned(),
            title_font: FontOptions { size: 12 },
            body_font: FontOptions { size: 11 },
            padding: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationOptions {
    /// Transition length for animated redraws, in milliseconds.
    pub duration: u32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration: ANIMATION_DURATION_MS,
        }
    }
}
