use std::f64::consts::TAU;

use super::{format_score, ChartRenderer, ChartSeries};

/// Radar (spider) chart drawn on a character grid.
///
/// Axes start at 12 o'clock and go clockwise in entry order. Vertices are
/// numbered; the legend below maps numbers to domains. Columns are doubled
/// so the polygon keeps its shape in a terminal cell grid.
#[derive(Debug, Clone, Copy)]
pub struct RadarChart {
    /// Rows between the center and the top of the axis
    pub radius: usize,
}

impl Default for RadarChart {
    fn default() -> Self {
        Self { radius: 8 }
    }
}

struct Canvas {
    cells: Vec<Vec<char>>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![vec![' '; width]; height],
        }
    }

    fn plot(&mut self, x: f64, y: f64, ch: char) {
        let (col, row) = (x.round(), y.round());
        if col < 0.0 || row < 0.0 {
            return;
        }
        if let Some(cell) = self
            .cells
            .get_mut(row as usize)
            .and_then(|line| line.get_mut(col as usize))
        {
            *cell = ch;
        }
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), ch: char) {
        let steps = (to.0 - from.0).abs().max((to.1 - from.1).abs()).ceil().max(1.0);
        let steps = steps as usize;
        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            self.plot(
                from.0 + (to.0 - from.0) * t,
                from.1 + (to.1 - from.1) * t,
                ch,
            );
        }
    }

    fn into_lines(self) -> Vec<String> {
        self.cells
            .into_iter()
            .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
            .collect()
    }
}

impl ChartRenderer for RadarChart {
    fn render(&self, series: &ChartSeries<'_>) -> String {
        if series.entries.is_empty() {
            return String::new();
        }

        let size = self.radius.max(1);
        let radius = size as f64;
        let center = (radius * 2.0, radius);
        let mut canvas = Canvas::new(size * 4 + 1, size * 2 + 1);

        let count = series.entries.len();
        let point = |index: usize, fraction: f64| {
            let angle = TAU * index as f64 / count as f64;
            (
                center.0 + angle.sin() * radius * fraction * 2.0,
                center.1 - angle.cos() * radius * fraction,
            )
        };

        for index in 0..count {
            canvas.line(center, point(index, 1.0), '.');
        }

        let vertices: Vec<(f64, f64)> = series
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| point(index, series.fraction(entry.score)))
            .collect();

        for (index, vertex) in vertices.iter().enumerate() {
            canvas.line(*vertex, vertices[(index + 1) % count], '*');
        }
        canvas.plot(center.0, center.1, '+');
        for (index, vertex) in vertices.iter().enumerate() {
            let marker = std::char::from_digit(((index + 1) % 36) as u32, 36).unwrap_or('o');
            canvas.plot(vertex.0, vertex.1, marker);
        }

        let mut lines = vec![format!(
            "{} ({}-{})",
            series.name,
            format_score(series.min),
            format_score(series.max)
        )];
        lines.extend(canvas.into_lines());
        for (index, entry) in series.entries.iter().enumerate() {
            lines.push(format!(
                "  {} {} ({})",
                index + 1,
                entry.domain,
                format_score(entry.score)
            ));
        }

        lines.join("\n")
    }
}
