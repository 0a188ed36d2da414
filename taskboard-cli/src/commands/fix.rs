//! `taskboard fix`

use std::fmt::Write;

use anyhow::Context;
use taskboard_kanban::repair::{FixDuplicates, RepairReport};
use taskboard_kanban::OperationProcessor;

use super::Runtime;

pub async fn run(runtime: &Runtime, json: bool) -> anyhow::Result<String> {
    let value = runtime
        .processor
        .process(&FixDuplicates::new(), &runtime.ctx)
        .await
        .context("fixing duplicate task ids")?;
    let report: RepairReport = serde_json::from_value(value)?;

    if json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    Ok(render(&report))
}

pub fn render(report: &RepairReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Scanned {} boards", report.boards_scanned);

    for board in &report.updated {
        let _ = writeln!(out, "\nBoard \"{}\" ({}) updated", board.board_name, board.board_id);
        for renamed in &board.renamed {
            let _ = writeln!(
                out,
                "  Changed task ID \"{}\" to \"{}\" in column {}",
                renamed.old_id, renamed.new_id, renamed.column_id
            );
        }
        if board.reordered > 0 {
            let _ = writeln!(out, "  Fixed order on {} tasks", board.reordered);
        }
    }

    if report.updated.is_empty() {
        let _ = write!(out, "\nNo changes needed.");
    } else {
        let _ = write!(
            out,
            "\nRepaired {} boards, renamed {} tasks. No tasks were deleted.",
            report.updated.len(),
            report.renamed_count()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_kanban::repair::{BoardRepair, RenamedTask};

    #[test]
    fn test_render_repair() {
        let report = RepairReport {
            boards_scanned: 2,
            updated: vec![BoardRepair {
                board_id: "b1".into(),
                board_name: "Roadmap".into(),
                renamed: vec![RenamedTask {
                    column_id: "todo".into(),
                    old_id: "dup".into(),
                    new_id: "task-1-abc".into(),
                }],
                reordered: 1,
            }],
        };

        let text = render(&report);
        assert!(text.contains("Scanned 2 boards"));
        assert!(text.contains("Changed task ID \"dup\" to \"task-1-abc\""));
        assert!(text.contains("Fixed order on 1 tasks"));
        assert!(text.contains("renamed 1 tasks"));
    }

    #[test]
    fn test_render_nothing_to_do() {
        let text = render(&RepairReport::default());
        assert!(text.ends_with("No changes needed."));
    }
}
