//! `taskboard diagnose`

use std::fmt::Write;

use anyhow::Context;
use taskboard_kanban::repair::{DiagnoseDuplicates, DiagnosisReport};

use super::Runtime;

pub async fn run(runtime: &Runtime, json: bool) -> anyhow::Result<String> {
    let report = DiagnoseDuplicates::new()
        .report(&runtime.ctx)
        .await
        .context("diagnosing duplicate task ids")?;

    if json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    Ok(render(&report))
}

/// Human-readable report: per-board column counts, duplicates, then totals
pub fn render(report: &DiagnosisReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Diagnostic mode: no changes will be made");
    let _ = writeln!(out, "Found {} boards\n", report.boards.len());

    for board in &report.boards {
        let _ = writeln!(out, "Board: \"{}\" ({})", board.board_name, board.board_id);
        for column in &board.columns {
            let _ = writeln!(out, "  Column \"{}\": {} tasks", column.column_name, column.task_count);
            if column.duplicates.is_empty() {
                let _ = writeln!(out, "    No duplicates found");
            } else {
                let _ = writeln!(out, "    DUPLICATES FOUND:");
                for dup in &column.duplicates {
                    let _ = writeln!(out, "      - Task ID \"{}\" appears {} times", dup.task_id, dup.count);
                }
            }
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "SUMMARY:");
    let _ = writeln!(out, "  Total tasks: {}", report.total_tasks);
    let _ = writeln!(out, "  Duplicate tasks: {}", report.duplicate_tasks);
    let _ = write!(out, "  Unique tasks: {}", report.unique_tasks);

    if report.is_clean() {
        let _ = write!(out, "\n\nNo duplicates found. Your data is clean.");
    } else {
        let _ = write!(out, "\n\nRun `taskboard fix` to rename the duplicates.");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_kanban::repair::diagnose_board;
    use taskboard_kanban::{Board, Column, Task};

    #[test]
    fn test_render_duplicates() {
        let t = |id: &str| Task::new(id, "To Do").with_id(id);
        let board = Board::new("Roadmap", "ada@example.com").with_columns(vec![
            Column::new("To Do").with_tasks(vec![t("dup"), t("dup"), t("x")]),
        ]);
        let diagnosis = diagnose_board(&board);
        let report = DiagnosisReport {
            duplicates: diagnosis.columns[0].duplicates.clone(),
            boards: vec![diagnosis],
            total_tasks: 3,
            duplicate_tasks: 1,
            unique_tasks: 2,
        };

        let text = render(&report);
        assert!(text.contains("Board: \"Roadmap\""));
        assert!(text.contains("Column \"To Do\": 3 tasks"));
        assert!(text.contains("Task ID \"dup\" appears 2 times"));
        assert!(text.contains("Unique tasks: 2"));
        assert!(text.contains("taskboard fix"));
    }

    #[test]
    fn test_render_clean() {
        let text = render(&DiagnosisReport::default());
        assert!(text.contains("Found 0 boards"));
        assert!(text.contains("Your data is clean"));
    }
}
