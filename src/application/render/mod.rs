// src/application/render/mod.rs
//
// Text presentation of a scored letter: the results table and two charts.
// Charts receive a named series and a numeric axis; out-of-axis values are
// clipped when drawn, never altered in the data.

pub mod bar_chart;
pub mod radar_chart;
pub mod table;

pub use bar_chart::BarChart;
pub use radar_chart::RadarChart;
pub use table::render_results;

use crate::domain::{DomainScoreEntry, SCORE_AXIS_MAX, SCORE_AXIS_MIN};
use crate::services::{project, InputStateManager};

/// A named series over a fixed numeric axis
#[derive(Debug, Clone, Copy)]
pub struct ChartSeries<'a> {
    pub name: &'a str,
    pub min: f64,
    pub max: f64,
    pub entries: &'a [DomainScoreEntry],
}

impl<'a> ChartSeries<'a> {
    /// The "Score" series on the shared [0, 100] axis
    pub fn scores(entries: &'a [DomainScoreEntry]) -> Self {
        Self {
            name: "Score",
            min: SCORE_AXIS_MIN,
            max: SCORE_AXIS_MAX,
            entries,
        }
    }

    /// Position of `value` on the axis in [0, 1]
    pub fn fraction(&self, value: f64) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

/// Draws a series as text. An empty series renders as an empty string.
pub trait ChartRenderer {
    fn render(&self, series: &ChartSeries<'_>) -> String;
}

/// Everything the page shows below the form for the current session:
/// the working label, the error region, or the results with both charts.
pub fn render_session(session: &InputStateManager) -> String {
    if session.is_pending() {
        return session.submit_label().to_string();
    }
    if let Some(message) = session.error_message() {
        return format!("Error: {}", message);
    }
    let Some(result) = session.result() else {
        return String::new();
    };

    let entries = project(Some(result));
    let series = ChartSeries::scores(&entries);
    [
        "Results".to_string(),
        render_results(result),
        BarChart::default().render(&series),
        RadarChart::default().render(&series),
    ]
    .join("\n\n")
}

/// Whole numbers without a decimal point, everything else as given
pub fn format_score(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
