use super::{format_score, ChartRenderer, ChartSeries};

/// Horizontal bar chart, one bar per entry
#[derive(Debug, Clone, Copy)]
pub struct BarChart {
    /// Characters used by a bar at the top of the axis
    pub width: usize,
}

impl Default for BarChart {
    fn default() -> Self {
        Self { width: 40 }
    }
}

impl ChartRenderer for BarChart {
    fn render(&self, series: &ChartSeries<'_>) -> String {
        if series.entries.is_empty() {
            return String::new();
        }

        let label_width = series
            .entries
            .iter()
            .map(|entry| entry.domain.len())
            .max()
            .unwrap_or(0);

        let mut lines = vec![format!(
            "{} ({}-{})",
            series.name,
            format_score(series.min),
            format_score(series.max)
        )];

        for entry in series.entries {
            let filled = (series.fraction(entry.score) * self.width as f64).round() as usize;
            lines.push(format!(
                "{:<label_width$} |{}{}| {}",
                entry.domain,
                "#".repeat(filled),
                " ".repeat(self.width - filled),
                format_score(entry.score),
                label_width = label_width
            ));
        }

        lines.join("\n")
    }
}
