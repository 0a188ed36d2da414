//! `taskboard boards`

use anyhow::Context;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use taskboard_kanban::board::ListBoards;
use taskboard_kanban::{Board, OperationProcessor};

use super::Runtime;

pub async fn run(runtime: &Runtime, all: bool) -> anyhow::Result<String> {
    let boards: Vec<Board> = if all {
        runtime.ctx.read_all_boards().await.context("reading boards")?
    } else {
        if runtime.ctx.session().is_none() {
            tracing::warn!("no user_email configured; only --all can list boards");
        }
        let value = runtime
            .processor
            .process(&ListBoards::new(), &runtime.ctx)
            .await
            .context("listing boards")?;
        serde_json::from_value(value)?
    };

    if boards.is_empty() {
        return Ok("No boards found.".to_string());
    }
    Ok(render(&boards))
}

/// One row per board with per-column task counts
pub fn render(boards: &[Board]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Name", "Owner", "Columns", "Tasks"]);

    for board in boards {
        let columns = board
            .columns
            .iter()
            .map(|c| format!("{} ({})", c.name, c.tasks.len()))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            board.id.to_string(),
            board.name.clone(),
            board.owner_id.clone(),
            columns,
            board.task_count().to_string(),
        ]);
    }
    table.to_string()
}
