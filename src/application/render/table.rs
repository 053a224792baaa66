use super::format_score;
use crate::domain::ScoreResult;
use crate::services::display_rows;

/// The results region: eight labeled values, one per line
pub fn render_results(result: &ScoreResult) -> String {
    let rows = display_rows(result);
    let width = rows.iter().map(|row| row.label.len()).max().unwrap_or(0);

    rows.iter()
        .map(|row| {
            let label = format!("{}:", row.label);
            format!("{:<width$} {}", label, format_score(row.value), width = width + 1)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
