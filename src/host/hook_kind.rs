use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::{CategoricalChartAdapter, ChartHook, TimeSeriesChartAdapter};
use crate::error::HookError;
use crate::render::ChartBackend;

/// Hook names a host element can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HookKind {
    BarChart,
    LineChart,
}

impl HookKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BarChart => "BarChart",
            Self::LineChart => "LineChart",
        }
    }

    /// Builds an uninitialized adapter of this kind.
    #[must_use]
    pub fn build<B>(self, backend: B) -> Box<dyn ChartHook>
    where
        B: ChartBackend + 'static,
    {
        match self {
            Self::BarChart => Box::new(CategoricalChartAdapter::new(backend)),
            Self::LineChart => Box::new(TimeSeriesChartAdapter::new(backend)),
        }
    }
}

impl FromStr for HookKind {
    type Err = HookError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "BarChart" => Ok(Self::BarChart),
            "LineChart" => Ok(Self::LineChart),
            other => Err(HookError::UnknownHook(other.to_owned())),
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::HookKind;
    use crate::api::ChartHook;
    use crate::render::RecordingBackend;

    #[test]
    fn hook_names_round_trip() {
        for kind in [HookKind::BarChart, HookKind::LineChart] {
            assert_eq!(kind.as_str().parse::<HookKind>().expect("known hook"), kind);
            assert_eq!(kind.build(RecordingBackend::new()).hook_name(), kind.as_str());
        }
        assert!("PieChart".parse::<HookKind>().is_err());
    }
}
